// Impact Calculator - Energy, crater and damage-zone estimation
// Scaling laws follow Collins et al. (2005) and standard overpressure curves

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::classify::{classify, Comparison};
use crate::config::EngineConfig;
use crate::error::{check_in_range, require_positive, EngineError};
use crate::taxonomy::mass_from_diameter;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Crater scaling law: D_m = 1.8 * E_J^0.25 * rho_target^-0.33 * sin(theta)^0.33
const CRATER_SCALING_COEFFICIENT: f64 = 1.8;
const CRATER_ENERGY_EXPONENT: f64 = 0.25;
const CRATER_DENSITY_EXPONENT: f64 = -0.33;
const CRATER_ANGLE_EXPONENT: f64 = 0.33;

/// Simple craters are roughly 0.3x as deep as they are wide.
const CRATER_DEPTH_RATIO: f64 = 0.3;

/// Overpressure ring radii in km over TNT tons.
const TOTAL_DESTRUCTION_COEFFICIENT: f64 = 0.28; // 20 psi
const SEVERE_DAMAGE_COEFFICIENT: f64 = 0.52; // 5 psi
const MODERATE_DAMAGE_COEFFICIENT: f64 = 1.0; // 1 psi

/// Third-degree thermal burn radius in km over TNT tons.
const THERMAL_BURNS_COEFFICIENT: f64 = 0.15;
const THERMAL_BURNS_EXPONENT: f64 = 0.41;

// =============================================================================
// INPUT MODEL
// =============================================================================

/// Physical parameters of the incoming asteroid. Constructed fresh per
/// request, never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    /// Diameter in meters (> 0).
    pub diameter_m: f64,
    /// Entry velocity in km/s (> 0).
    pub velocity_km_s: f64,
    /// Entry angle measured from horizontal, degrees (0 < angle <= 90).
    pub entry_angle_deg: f64,
    /// Bulk density in kg/m³; the configured S-type constant when unknown.
    /// `taxonomy::density_from_h_magnitude` produces refined values when
    /// survey data is available.
    pub density_kg_m3: Option<f64>,
}

/// Ground-zero coordinates. Tags the result only: the calculation itself is
/// location-agnostic and population effects use the configured flat density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    pub latitude: f64,
    pub longitude: f64,
}

// =============================================================================
// RESULT MODEL
// =============================================================================

/// Damage-zone identity. The serialized snake_case name is the stable key the
/// rendering layer maps to a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Crater,
    TotalDestruction,
    SevereDamage,
    ModerateDamage,
    ThermalBurns,
}

/// One concentric damage ring around ground zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageZone {
    pub radius_km: f64,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
}

/// Complete impact assessment. Derived once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub location: ImpactLocation,
    pub energy_joules: f64,
    pub energy_megatons_tnt: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    /// Sorted by radius descending so a renderer can layer back-to-front.
    pub damage_zones: Vec<DamageZone>,
    pub casualties_estimated: u64,
    pub comparison: Comparison,
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Fraction of entry velocity retained after atmospheric passage
/// (Collins et al. 2005, simplified). Small bodies shed a large share of
/// their velocity; large bodies barely notice the atmosphere.
fn atmospheric_retention_factor(diameter_m: f64) -> f64 {
    if diameter_m < 50.0 {
        0.70
    } else if diameter_m < 200.0 {
        0.85
    } else {
        0.95
    }
}

/// Compute the full consequence estimate for an asteroid strike.
///
/// Stateless and deterministic: identical inputs yield identical results.
/// Only physically-required bounds are enforced here; policy caps (e.g.
/// maximum simulated diameter) belong to the request boundary.
pub fn compute_impact(
    params: &AsteroidParams,
    location: ImpactLocation,
    config: &EngineConfig,
) -> Result<ImpactResult, EngineError> {
    let diameter_m = require_positive("diameter_m", params.diameter_m)?;
    let velocity_km_s = require_positive("velocity_km_s", params.velocity_km_s)?;
    let density_kg_m3 = match params.density_kg_m3 {
        Some(density) => require_positive("density_kg_m3", density)?,
        None => config.asteroid_density_kg_m3,
    };

    let angle_deg = params.entry_angle_deg;
    if !angle_deg.is_finite() || angle_deg <= 0.0 || angle_deg > 90.0 {
        return Err(EngineError::InvalidParameter {
            name: "entry_angle_deg",
            value: angle_deg,
            reason: "entry angle must lie in (0, 90] degrees from horizontal",
        });
    }

    // Mass from a spherical volume model
    let mass_kg = mass_from_diameter(diameter_m, density_kg_m3);

    // Velocity at the surface, optionally after atmospheric deceleration
    let entry_velocity_m_s = velocity_km_s * 1000.0;
    let velocity_m_s = if config.atmospheric_entry {
        entry_velocity_m_s * atmospheric_retention_factor(diameter_m)
    } else {
        entry_velocity_m_s
    };

    // Kinetic energy and TNT equivalent
    let energy_joules = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    let energy_megatons_tnt = energy_joules / config.joules_per_megaton;

    // Crater scaling law (energy in joules, diameter in meters)
    let angle_rad = angle_deg.to_radians();
    let crater_diameter_m = CRATER_SCALING_COEFFICIENT
        * energy_joules.powf(CRATER_ENERGY_EXPONENT)
        * config.target_density_kg_m3.powf(CRATER_DENSITY_EXPONENT)
        * angle_rad.sin().powf(CRATER_ANGLE_EXPONENT);
    let crater_diameter_km = crater_diameter_m / 1000.0;
    let crater_depth_km = crater_diameter_km * CRATER_DEPTH_RATIO;

    // Overpressure rings over TNT tons
    let tnt_tons = energy_megatons_tnt * 1_000_000.0;
    let blast_scale = tnt_tons.powf(1.0 / 3.0);
    let total_destruction_km = TOTAL_DESTRUCTION_COEFFICIENT * blast_scale;
    let severe_damage_km = SEVERE_DAMAGE_COEFFICIENT * blast_scale;
    let moderate_damage_km = MODERATE_DAMAGE_COEFFICIENT * blast_scale;
    let thermal_burns_km = THERMAL_BURNS_COEFFICIENT * tnt_tons.powf(THERMAL_BURNS_EXPONENT);

    let mut damage_zones = vec![
        DamageZone {
            radius_km: thermal_burns_km,
            zone_type: ZoneType::ThermalBurns,
        },
        DamageZone {
            radius_km: moderate_damage_km,
            zone_type: ZoneType::ModerateDamage,
        },
        DamageZone {
            radius_km: severe_damage_km,
            zone_type: ZoneType::SevereDamage,
        },
        DamageZone {
            radius_km: total_destruction_km,
            zone_type: ZoneType::TotalDestruction,
        },
        DamageZone {
            radius_km: crater_diameter_km / 2.0,
            zone_type: ZoneType::Crater,
        },
    ];
    // Largest first so a renderer can layer back-to-front. The thermal curve
    // crosses under the blast curves at low yields, so the order is not fixed.
    damage_zones.sort_by(|a, b| b.radius_km.total_cmp(&a.radius_km));

    check_in_range("energy_joules", energy_joules)?;
    check_in_range("crater_diameter_km", crater_diameter_km)?;
    for zone in &damage_zones {
        check_in_range("damage_zone_radius_km", zone.radius_km)?;
    }

    // Casualties inside the lethal (total destruction) ring. The flat
    // population density stands in for a real lookup, which belongs to the
    // caller; override via `EngineConfig` when better data exists.
    let lethal_area_km2 = PI * total_destruction_km * total_destruction_km;
    let casualties_estimated =
        (lethal_area_km2 * config.population_density_per_km2 * config.casualty_rate).floor() as u64;

    let comparison = classify(energy_megatons_tnt);

    Ok(ImpactResult {
        location,
        energy_joules,
        energy_megatons_tnt,
        crater_diameter_km,
        crater_depth_km,
        damage_zones,
        casualties_estimated,
        comparison,
    })
}

// =============================================================================
// TESTS
// =============================================================================
