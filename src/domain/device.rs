//! User-Agent classification
//!
//! Best-effort device and browser tagging used to enrich lead records.
//! Never more than a coarse label; anything unrecognized is "Unknown".

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrowserFamily {
    Chrome,
    Safari,
    Firefox,
    Edge,
    Opera,
    #[serde(rename = "Internet Explorer")]
    InternetExplorer,
    Unknown,
}

const TABLET_MARKERS: &[&str] = &["tablet", "ipad", "playbook", "silk"];

const MOBILE_MARKERS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipod",
    "iemobile",
    "blackberry",
    "kindle",
    "silk-accelerated",
    "hpwos",
    "webos",
    "opera mobi",
    "opera mini",
];

/// Classify a User-Agent string into a coarse device bucket.
///
/// Android without "mobi" is a tablet by convention, so the tablet check
/// runs first.
pub fn detect_device_type(user_agent: &str) -> DeviceType {
    let ua = user_agent.to_lowercase();

    if TABLET_MARKERS.iter().any(|marker| ua.contains(marker))
        || (ua.contains("android") && !ua.contains("mobi"))
    {
        return DeviceType::Tablet;
    }

    if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
        return DeviceType::Mobile;
    }

    DeviceType::Desktop
}

/// Pick the browser family out of a User-Agent string.
///
/// Order matters: Chromium UAs carry "Safari", Edge carries "Chrome".
pub fn detect_browser(user_agent: &str) -> BrowserFamily {
    if user_agent.contains("Edg") {
        return BrowserFamily::Edge;
    }
    if user_agent.contains("Chrome") {
        return BrowserFamily::Chrome;
    }
    if user_agent.contains("Safari") {
        return BrowserFamily::Safari;
    }
    if user_agent.contains("Firefox") {
        return BrowserFamily::Firefox;
    }
    if user_agent.contains("Opera") || user_agent.contains("OPR") {
        return BrowserFamily::Opera;
    }
    if user_agent.contains("Trident") {
        return BrowserFamily::InternetExplorer;
    }
    BrowserFamily::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const EDGE_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                                 AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 \
                                 Mobile/15E148 Safari/604.1";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X710) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                                 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
    const FIREFOX_DESKTOP: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn classifies_devices() {
        assert_eq!(detect_device_type(CHROME_DESKTOP), DeviceType::Desktop);
        assert_eq!(detect_device_type(SAFARI_IPHONE), DeviceType::Mobile);
        assert_eq!(detect_device_type(ANDROID_PHONE), DeviceType::Mobile);
        assert_eq!(detect_device_type(ANDROID_TABLET), DeviceType::Tablet);
        assert_eq!(detect_device_type("iPad; CPU OS 17_0"), DeviceType::Tablet);
    }

    #[test]
    fn classifies_browsers() {
        assert_eq!(detect_browser(CHROME_DESKTOP), BrowserFamily::Chrome);
        assert_eq!(detect_browser(EDGE_DESKTOP), BrowserFamily::Edge);
        assert_eq!(detect_browser(SAFARI_IPHONE), BrowserFamily::Safari);
        assert_eq!(detect_browser(FIREFOX_DESKTOP), BrowserFamily::Firefox);
        assert_eq!(detect_browser("curl/8.4.0"), BrowserFamily::Unknown);
    }

    #[test]
    fn unknown_agents_default_to_desktop() {
        assert_eq!(detect_device_type(""), DeviceType::Desktop);
        assert_eq!(detect_device_type("curl/8.4.0"), DeviceType::Desktop);
    }
}
