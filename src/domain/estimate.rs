//! Cost-estimate calculator domain types
//!
//! Pure pricing model for interior work: a base carpentry range by scope,
//! scaled by size, finish and storage multipliers, plus electrical/painting
//! add-ons and a renovation surcharge. All values in ₹ lakhs.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Scope of carpentry work requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeOfWork {
    KitchenOnly,
    KitchenWardrobes,
    KitchenWardrobesLiving,
}

/// Finish level chosen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinishLevel {
    Essential,
    Premium,
    Luxe,
}

/// How much storage the design must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageRequirement {
    Light,
    Standard,
    Heavy,
}

/// Home size bracket; `FiveBhk` means 5 or more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BhkSize {
    #[serde(rename = "3bhk")]
    ThreeBhk,
    #[serde(rename = "4bhk")]
    FourBhk,
    #[serde(rename = "5bhk")]
    FiveBhk,
}

/// Where the property is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    UnderConstruction,
    HandedOver,
    Renovation,
}

/// Fully-specified project description fed to the calculator.
///
/// Every enum field is required on the wire; deserialization failing is the
/// completeness gate, so `calculate` never sees a partial project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInputs {
    pub scope: ScopeOfWork,
    pub finish: FinishLevel,
    pub storage: StorageRequirement,
    pub bhk_size: BhkSize,
    pub property_status: PropertyStatus,
    pub has_electrical_changes: bool,
    pub has_painting_changes: bool,
}

/// Every intermediate the totals are built from, for UI disclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub carpentry_low: Decimal,
    pub carpentry_high: Decimal,
    pub electrical_low: Decimal,
    pub electrical_high: Decimal,
    pub painting_low: Decimal,
    pub painting_high: Decimal,
    pub size_multiplier: Decimal,
    pub finish_multiplier: Decimal,
    pub storage_multiplier: Decimal,
    pub renovation_multiplier: Decimal,
    pub bhk_size: BhkSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub total_low: Decimal,
    pub total_high: Decimal,
    pub breakdown: EstimateBreakdown,
}

// Base carpentry range (₹ lakh) by scope
fn scope_range(scope: ScopeOfWork) -> (Decimal, Decimal) {
    match scope {
        ScopeOfWork::KitchenOnly => (dec!(4.5), dec!(8)),
        ScopeOfWork::KitchenWardrobes => (dec!(10), dec!(18)),
        ScopeOfWork::KitchenWardrobesLiving => (dec!(13), dec!(24)),
    }
}

fn finish_multiplier(finish: FinishLevel) -> Decimal {
    match finish {
        FinishLevel::Essential => dec!(0.90),
        FinishLevel::Premium => dec!(1.00),
        FinishLevel::Luxe => dec!(1.25),
    }
}

fn storage_multiplier(storage: StorageRequirement) -> Decimal {
    match storage {
        StorageRequirement::Light => dec!(0.90),
        StorageRequirement::Standard => dec!(1.00),
        StorageRequirement::Heavy => dec!(1.20),
    }
}

// 3bhk anchors the base ranges; larger homes scale up from there
fn size_multiplier(bhk: BhkSize) -> Decimal {
    match bhk {
        BhkSize::ThreeBhk => dec!(1.00),
        BhkSize::FourBhk => dec!(1.15),
        BhkSize::FiveBhk => dec!(1.30),
    }
}

// Electrical add-on (₹ lakh), before size scaling
const ELECTRICAL_ADD: (Decimal, Decimal) = (dec!(0.9), dec!(1.8));

// Painting add-on (₹ lakh), before size scaling
const PAINTING_ADD: (Decimal, Decimal) = (dec!(0.8), dec!(4.0));

const RENOVATION_MULTIPLIER: Decimal = dec!(1.20);
const NO_RENOVATION_MULTIPLIER: Decimal = dec!(1.00);

/// Round half-up at the tenths digit; everything reported uses this.
fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute a cost range for a fully-specified project.
///
/// Total over all enum combinations, deterministic, no side effects. The
/// totals are derived from the rounded breakdown entries, so replaying
/// `(carpentry + electrical + painting) * renovation` from the breakdown
/// reconstructs them exactly.
pub fn calculate(inputs: &ProjectInputs) -> EstimateResult {
    let (base_low, base_high) = scope_range(inputs.scope);
    let size_m = size_multiplier(inputs.bhk_size);
    let finish_m = finish_multiplier(inputs.finish);
    let storage_m = storage_multiplier(inputs.storage);

    // Size scales the base before the style modifiers apply
    let carpentry_low = round1(base_low * size_m * finish_m * storage_m);
    let carpentry_high = round1(base_high * size_m * finish_m * storage_m);

    // Add-ons scale with home size only, never with finish/storage
    let (electrical_low, electrical_high) = if inputs.has_electrical_changes {
        (round1(ELECTRICAL_ADD.0 * size_m), round1(ELECTRICAL_ADD.1 * size_m))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let (painting_low, painting_high) = if inputs.has_painting_changes {
        (round1(PAINTING_ADD.0 * size_m), round1(PAINTING_ADD.1 * size_m))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let renovation_m = if inputs.property_status == PropertyStatus::Renovation {
        RENOVATION_MULTIPLIER
    } else {
        NO_RENOVATION_MULTIPLIER
    };

    let total_low = round1((carpentry_low + electrical_low + painting_low) * renovation_m);
    let total_high = round1((carpentry_high + electrical_high + painting_high) * renovation_m);

    EstimateResult {
        total_low,
        total_high,
        breakdown: EstimateBreakdown {
            carpentry_low,
            carpentry_high,
            electrical_low,
            electrical_high,
            painting_low,
            painting_high,
            size_multiplier: size_m,
            finish_multiplier: finish_m,
            storage_multiplier: storage_m,
            renovation_multiplier: renovation_m,
            bhk_size: inputs.bhk_size,
        },
    }
}
