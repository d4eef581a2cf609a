// Severity Classifier - Maps impact energy to a qualitative band
// Comparison labels follow well-known historical events

use serde::{Deserialize, Serialize};

// =============================================================================
// BAND THRESHOLDS (megatons TNT)
// =============================================================================

/// Hiroshima bomb yield (~15 kilotons).
pub const HIROSHIMA_MEGATONS: f64 = 0.015;

/// Upper edge of the Hiroshima-multiple band.
pub const HIROSHIMA_BAND_MAX_MEGATONS: f64 = 15.0;

/// Tunguska-scale window inside the catastrophe range.
pub const TUNGUSKA_MIN_MEGATONS: f64 = 10.0;
pub const TUNGUSKA_MAX_MEGATONS: f64 = 20.0;

/// Upper edge of the major-catastrophe band.
pub const CATASTROPHE_MAX_MEGATONS: f64 = 1000.0;

/// Upper edge of the civilization-threatening band; above this lies the
/// extinction-level regime.
pub const CIVILIZATION_MAX_MEGATONS: f64 = 100_000.0;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Qualitative severity band for an impact energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyBand {
    SubHiroshima,
    HiroshimaMultiple,
    TunguskaScale,
    MajorCatastrophe,
    CivilizationThreatening,
    ExtinctionLevel,
}

/// Severity band plus the human-readable comparison shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub band: EnergyBand,
    pub label: String,
}

/// Classify an impact energy against historical explosions.
///
/// Pure lookup over fixed ascending thresholds. Reusable by any caller that
/// only has an energy value, e.g. replaying a real NEO close approach as a
/// hypothetical impact via `taxonomy::approach_energy`.
pub fn classify(energy_megatons_tnt: f64) -> Comparison {
    let megatons = energy_megatons_tnt;

    if megatons < HIROSHIMA_MEGATONS {
        let kilotons = megatons * 1000.0;
        Comparison {
            band: EnergyBand::SubHiroshima,
            label: format!("{:.1} kilotons (smaller than Hiroshima)", kilotons),
        }
    } else if megatons < HIROSHIMA_BAND_MAX_MEGATONS {
        let multiplier = megatons / HIROSHIMA_MEGATONS;
        Comparison {
            band: EnergyBand::HiroshimaMultiple,
            label: format!("{:.0}x Hiroshima bomb", multiplier),
        }
    } else if megatons < CATASTROPHE_MAX_MEGATONS {
        if (TUNGUSKA_MIN_MEGATONS..=TUNGUSKA_MAX_MEGATONS).contains(&megatons) {
            Comparison {
                band: EnergyBand::TunguskaScale,
                label: format!("Tunguska event scale ({:.0} megatons)", megatons),
            }
        } else {
            Comparison {
                band: EnergyBand::MajorCatastrophe,
                label: format!("{:.0} megatons (major catastrophe)", megatons),
            }
        }
    } else if megatons < CIVILIZATION_MAX_MEGATONS {
        Comparison {
            band: EnergyBand::CivilizationThreatening,
            label: format!("{:.0} megatons (civilization-threatening)", megatons),
        }
    } else {
        Comparison {
            band: EnergyBand::ExtinctionLevel,
            label: format!("{:.0} megatons (dinosaur extinction level)", megatons),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
