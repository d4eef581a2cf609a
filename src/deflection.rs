// Deflection Simulator - Mitigation mission effectiveness estimation
// Method trade-offs follow the NASA Deflection Analysis of Alternatives (2007)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::error::{check_in_range, require_positive, EngineError};
use crate::taxonomy::mass_from_diameter;

/// Seconds per day, for accumulating a velocity change into a miss distance.
const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// METHODS
// =============================================================================

/// Closed set of mitigation strategies. Selection is a tagged variant rather
/// than a string branch, so every match is checked exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionMethod {
    KineticImpactor,
    GravityTractor,
    Nuclear,
}

impl DeflectionMethod {
    /// Human-readable mission name.
    pub fn label(&self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => "Kinetic Impactor",
            DeflectionMethod::GravityTractor => "Gravity Tractor",
            DeflectionMethod::Nuclear => "Nuclear Deflection",
        }
    }

    /// Wire identifier, matching the serde encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor => "kinetic_impactor",
            DeflectionMethod::GravityTractor => "gravity_tractor",
            DeflectionMethod::Nuclear => "nuclear",
        }
    }
}

impl FromStr for DeflectionMethod {
    type Err = EngineError;

    /// Parse the wire string; anything outside the closed set is an error,
    /// never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kinetic_impactor" => Ok(DeflectionMethod::KineticImpactor),
            "gravity_tractor" => Ok(DeflectionMethod::GravityTractor),
            "nuclear" => Ok(DeflectionMethod::Nuclear),
            other => Err(EngineError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Outcome classification derived from the success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionStatus {
    Success,
    Partial,
    Failure,
}

// =============================================================================
// INPUT / RESULT MODEL
// =============================================================================

/// Inputs for one deflection evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionParams {
    /// Diameter in meters (> 0).
    pub diameter_m: f64,
    /// Mass in kg; estimated from diameter and the configured bulk density
    /// when absent.
    pub mass_kg: Option<f64>,
    /// Current velocity in km/s (> 0).
    pub velocity_km_s: f64,
    /// Warning time in days (>= 0).
    pub days_until_impact: i64,
    pub method: DeflectionMethod,
}

/// Outcome of one deflection evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResult {
    pub method: DeflectionMethod,
    /// Velocity change imparted to the asteroid (km/s, >= 0).
    pub velocity_change_km_s: f64,
    /// Lateral displacement accumulated over the remaining lead time (km).
    pub deflection_distance_km: f64,
    /// 0..=100, clamped.
    pub effectiveness_percent: f64,
    /// 0..=100, clamped.
    pub success_probability_percent: f64,
    pub status: DeflectionStatus,
    /// Additive annotations; never alter the numeric result.
    pub advisory_warnings: Vec<String>,
}

// =============================================================================
// SIMULATION
// =============================================================================

/// Impulsive delta-v from a standoff nuclear detonation: the configured
/// fraction of device yield couples into asteroid kinetic energy,
/// dv = sqrt(2 * E_k / m).
fn nuclear_delta_v_km_s(mass_kg: f64, config: &EngineConfig) -> f64 {
    let yield_joules = config.nuclear_yield_megatons * config.joules_per_megaton;
    let kinetic_joules = yield_joules * config.nuclear_coupling;
    (2.0 * kinetic_joules / mass_kg).sqrt() / 1000.0
}

/// Effectiveness read off the miss distance measured in Earth radii.
/// Tiers differ per method.
fn effectiveness_tier(method: DeflectionMethod, miss_km: f64, earth_radius_km: f64) -> f64 {
    let r = earth_radius_km;
    match method {
        DeflectionMethod::KineticImpactor => {
            if miss_km > 2.0 * r {
                100.0
            } else if miss_km > r {
                80.0
            } else if miss_km > 0.5 * r {
                50.0
            } else {
                20.0
            }
        }
        DeflectionMethod::GravityTractor => {
            if miss_km > 1.5 * r {
                90.0
            } else if miss_km > r {
                70.0
            } else if miss_km > 0.3 * r {
                40.0
            } else {
                15.0
            }
        }
        DeflectionMethod::Nuclear => {
            if miss_km > 3.0 * r {
                95.0
            } else if miss_km > 1.5 * r {
                85.0
            } else if miss_km > 0.5 * r {
                60.0
            } else {
                25.0
            }
        }
    }
}

/// Evaluate whether a mitigation mission can prevent the strike.
///
/// Stateless and deterministic. Each method trades deployment speed against
/// reliability: the impactor punishes short lead times, the tractor rewards
/// long ones, the nuclear option carries the highest baseline and an
/// excessive-force advisory against small targets.
pub fn simulate_deflection(
    params: &DeflectionParams,
    config: &EngineConfig,
) -> Result<DeflectionResult, EngineError> {
    let diameter_m = require_positive("diameter_m", params.diameter_m)?;
    require_positive("velocity_km_s", params.velocity_km_s)?;

    if params.days_until_impact < 0 {
        return Err(EngineError::InvalidParameter {
            name: "days_until_impact",
            value: params.days_until_impact as f64,
            reason: "lead time cannot be negative",
        });
    }
    let days = params.days_until_impact as f64;

    let mass_kg = match params.mass_kg {
        Some(mass) => require_positive("mass_kg", mass)?,
        None => mass_from_diameter(diameter_m, config.asteroid_density_kg_m3),
    };

    // Per-method success probability and delta-v, both pre-clamp
    let (raw_success, raw_delta_v) = match params.method {
        DeflectionMethod::KineticImpactor => (
            100.0 - diameter_m / 20.0 - 60.0 / days,
            0.0005 * (100.0 - diameter_m / 100.0),
        ),
        DeflectionMethod::GravityTractor => {
            (80.0 - diameter_m / 50.0 + days / 10.0, 0.00001 * days)
        }
        DeflectionMethod::Nuclear => (
            90.0 - diameter_m / 80.0 - 30.0 / days,
            nuclear_delta_v_km_s(mass_kg, config),
        ),
    };

    // The linear forms can overshoot [0, 100]; the clamp is the contract.
    // days = 0 sends the lead-time terms to -inf and the clamp floors those
    // at zero.
    let success_probability_percent = raw_success.clamp(0.0, 100.0);
    let velocity_change_km_s = raw_delta_v.max(0.0);

    let deflection_distance_km = velocity_change_km_s * days * SECONDS_PER_DAY;

    check_in_range("velocity_change_km_s", velocity_change_km_s)?;
    check_in_range("deflection_distance_km", deflection_distance_km)?;

    let effectiveness_percent =
        effectiveness_tier(params.method, deflection_distance_km, config.earth_radius_km)
            .clamp(0.0, 100.0);

    let status = if success_probability_percent >= config.success_threshold_percent {
        DeflectionStatus::Success
    } else if success_probability_percent >= config.partial_threshold_percent {
        DeflectionStatus::Partial
    } else {
        DeflectionStatus::Failure
    };

    let mut advisory_warnings = Vec::new();
    if params.method == DeflectionMethod::Nuclear
        && diameter_m < config.excessive_force_diameter_m
    {
        advisory_warnings.push(format!(
            "excessive force: a nuclear device is disproportionate for a {:.0} m object",
            diameter_m
        ));
    }
    if params.days_until_impact < config.short_lead_time_days {
        advisory_warnings.push(format!(
            "insufficient lead time: {} days leaves little margin for mission deployment",
            params.days_until_impact
        ));
    }

    Ok(DeflectionResult {
        method: params.method,
        velocity_change_km_s,
        deflection_distance_km,
        effectiveness_percent,
        success_probability_percent,
        status,
        advisory_warnings,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(
        diameter_m: f64,
        days_until_impact: i64,
        method: DeflectionMethod,
    ) -> DeflectionParams {
        DeflectionParams {
            diameter_m,
            mass_kg: None,
            velocity_km_s: 20.0,
            days_until_impact,
            method,
        }
    }

    #[test]
    fn test_kinetic_impactor_nominal() {
        let result = simulate_deflection(
            &params(500.0, 180, DeflectionMethod::KineticImpactor),
            &EngineConfig::default(),
        )
        .unwrap();

        // 100 - 500/20 - 60/180
        assert_relative_eq!(
            result.success_probability_percent,
            74.6667,
            max_relative = 1e-4
        );
        assert_eq!(result.status, DeflectionStatus::Success);
        // 0.0005 * (100 - 500/100)
        assert_relative_eq!(result.velocity_change_km_s, 0.0475, max_relative = 1e-12);
        assert_relative_eq!(
            result.deflection_distance_km,
            0.0475 * 180.0 * 86_400.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.effectiveness_percent, 100.0);
        assert!(result.advisory_warnings.is_empty());
    }

    #[test]
    fn test_kinetic_impactor_hopeless_case_clamps_to_zero() {
        // 5 km body, 10 days out: the formula goes deeply negative
        let result = simulate_deflection(
            &params(5000.0, 10, DeflectionMethod::KineticImpactor),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(result.success_probability_percent, 0.0);
        assert_eq!(result.status, DeflectionStatus::Failure);
        assert!(result.velocity_change_km_s >= 0.0);
        assert_eq!(result.advisory_warnings.len(), 1);
        assert!(result.advisory_warnings[0].contains("insufficient lead time"));
    }

    #[test]
    fn test_gravity_tractor_rewards_long_lead_times() {
        let config = EngineConfig::default();
        let short = simulate_deflection(
            &params(1000.0, 100, DeflectionMethod::GravityTractor),
            &config,
        )
        .unwrap();
        let long = simulate_deflection(
            &params(1000.0, 3650, DeflectionMethod::GravityTractor),
            &config,
        )
        .unwrap();

        assert!(long.success_probability_percent > short.success_probability_percent);
        assert!(long.velocity_change_km_s > short.velocity_change_km_s);
        // 80 - 1000/50 + 3650/10 overshoots; must clamp to 100
        assert_relative_eq!(long.success_probability_percent, 100.0);
    }

    #[test]
    fn test_gravity_tractor_delta_v_scales_with_days() {
        let result = simulate_deflection(
            &params(1000.0, 365, DeflectionMethod::GravityTractor),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(result.velocity_change_km_s, 0.00365, max_relative = 1e-12);
        assert_relative_eq!(result.effectiveness_percent, 90.0);
    }

    #[test]
    fn test_nuclear_small_target_draws_excessive_force_advisory() {
        let result = simulate_deflection(
            &params(40.0, 180, DeflectionMethod::Nuclear),
            &EngineConfig::default(),
        )
        .unwrap();

        assert!(result
            .advisory_warnings
            .iter()
            .any(|w| w.contains("excessive force")));
        // The advisory never changes the numbers
        assert_eq!(result.status, DeflectionStatus::Success);
        assert!(result.success_probability_percent > 85.0);
    }

    #[test]
    fn test_nuclear_at_threshold_has_no_advisory() {
        let result = simulate_deflection(
            &params(200.0, 180, DeflectionMethod::Nuclear),
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(result.advisory_warnings.is_empty());
    }

    #[test]
    fn test_nuclear_delta_v_from_energy_coupling() {
        // 200 m rocky body: m = (4/3)*pi*100^3*3000 = 1.2566e10 kg,
        // dv = sqrt(2 * 0.1 * 4.184e15 / m) / 1000
        let result = simulate_deflection(
            &params(200.0, 365, DeflectionMethod::Nuclear),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(result.velocity_change_km_s, 0.258, max_relative = 1e-2);
    }

    #[test]
    fn test_explicit_mass_matches_derived_mass() {
        let config = EngineConfig::default();
        let derived =
            simulate_deflection(&params(200.0, 365, DeflectionMethod::Nuclear), &config).unwrap();

        let mut explicit_params = params(200.0, 365, DeflectionMethod::Nuclear);
        explicit_params.mass_kg = Some(mass_from_diameter(200.0, 3000.0));
        let explicit = simulate_deflection(&explicit_params, &config).unwrap();

        assert_relative_eq!(
            derived.velocity_change_km_s,
            explicit.velocity_change_km_s,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_lead_time() {
        let result = simulate_deflection(
            &params(100.0, 0, DeflectionMethod::KineticImpactor),
            &EngineConfig::default(),
        )
        .unwrap();

        // 60/0 drives the formula to -inf; the clamp floors it at zero
        assert_relative_eq!(result.success_probability_percent, 0.0);
        assert_relative_eq!(result.deflection_distance_km, 0.0);
        assert_eq!(result.status, DeflectionStatus::Failure);
        assert!(result
            .advisory_warnings
            .iter()
            .any(|w| w.contains("insufficient lead time")));
    }

    #[test]
    fn test_status_thresholds() {
        let config = EngineConfig::default();
        // Gravity tractor at zero days isolates the size term: 80 - d/50
        let exactly_success =
            simulate_deflection(&params(500.0, 0, DeflectionMethod::GravityTractor), &config)
                .unwrap();
        assert_relative_eq!(exactly_success.success_probability_percent, 70.0);
        assert_eq!(exactly_success.status, DeflectionStatus::Success);

        let just_partial =
            simulate_deflection(&params(505.0, 0, DeflectionMethod::GravityTractor), &config)
                .unwrap();
        assert_eq!(just_partial.status, DeflectionStatus::Partial);

        let exactly_partial =
            simulate_deflection(&params(2000.0, 0, DeflectionMethod::GravityTractor), &config)
                .unwrap();
        assert_relative_eq!(exactly_partial.success_probability_percent, 40.0);
        assert_eq!(exactly_partial.status, DeflectionStatus::Partial);

        let failure =
            simulate_deflection(&params(2005.0, 0, DeflectionMethod::GravityTractor), &config)
                .unwrap();
        assert_eq!(failure.status, DeflectionStatus::Failure);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let config = EngineConfig::default();

        let err = simulate_deflection(
            &params(0.0, 100, DeflectionMethod::KineticImpactor),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { .. }));

        let err = simulate_deflection(
            &params(500.0, -1, DeflectionMethod::KineticImpactor),
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameter {
                name: "days_until_impact",
                ..
            }
        ));

        let mut bad_mass = params(500.0, 100, DeflectionMethod::Nuclear);
        bad_mass.mass_kg = Some(0.0);
        assert!(simulate_deflection(&bad_mass, &config).is_err());
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "kinetic_impactor".parse::<DeflectionMethod>().unwrap(),
            DeflectionMethod::KineticImpactor
        );
        assert_eq!(
            "gravity_tractor".parse::<DeflectionMethod>().unwrap(),
            DeflectionMethod::GravityTractor
        );
        assert_eq!(
            "nuclear".parse::<DeflectionMethod>().unwrap(),
            DeflectionMethod::Nuclear
        );

        let err = "solar_sail".parse::<DeflectionMethod>().unwrap_err();
        assert_eq!(err, EngineError::UnsupportedMethod("solar_sail".to_string()));
    }

    #[test]
    fn test_method_and_status_serde_roundtrip() {
        let methods = vec![
            DeflectionMethod::KineticImpactor,
            DeflectionMethod::GravityTractor,
            DeflectionMethod::Nuclear,
        ];
        for m in methods {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.as_str()));
            let back: DeflectionMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(m, back);
        }

        let statuses = vec![
            DeflectionStatus::Success,
            DeflectionStatus::Partial,
            DeflectionStatus::Failure,
        ];
        for s in statuses {
            let json = serde_json::to_string(&s).unwrap();
            let back: DeflectionStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }
}
