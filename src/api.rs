// Request Boundary - Transport-agnostic request/response contracts
// Enforces caller policy ranges, runs the engine, shapes the wire response

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::deflection::{
    simulate_deflection, DeflectionMethod, DeflectionParams, DeflectionStatus,
};
use crate::error::RequestError;
use crate::impact::{compute_impact, AsteroidParams, DamageZone, ImpactLocation};

// =============================================================================
// VALIDATED RANGES (caller policy, enforced before the engine runs)
// =============================================================================

pub const SIZE_RANGE_M: (f64, f64) = (10.0, 10_000.0);
pub const SPEED_RANGE_KM_S: (f64, f64) = (10.0, 70.0);
pub const ANGLE_RANGE_DEG: (f64, f64) = (15.0, 90.0);
pub const LATITUDE_RANGE_DEG: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE_DEG: (f64, f64) = (-180.0, 180.0);

fn check_bounds(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), RequestError> {
    if !value.is_finite() || value < min || value > max {
        return Err(RequestError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Round for display; engine-level results stay exact.
fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn default_angle_deg() -> f64 {
    45.0
}

// =============================================================================
// IMPACT CONTRACT
// =============================================================================

/// Impact simulation request, as any transport delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactRequest {
    /// Asteroid diameter in meters.
    pub size_m: f64,
    /// Velocity in km/s.
    pub speed_km_s: f64,
    /// Entry angle in degrees; 45 when omitted.
    #[serde(default = "default_angle_deg")]
    pub angle_deg: f64,
    /// Impact latitude.
    pub lat: f64,
    /// Impact longitude.
    pub lon: f64,
    /// Bulk density override in kg/m³ (e.g. from a taxonomy estimate).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
}

/// Impact simulation response, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResponse {
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    pub damage_zones: Vec<DamageZone>,
    pub deaths_estimated: u64,
    pub comparison: String,
}

/// Validate an impact request against caller policy and run the calculator.
pub fn handle_impact(
    request: &ImpactRequest,
    config: &EngineConfig,
) -> Result<ImpactResponse, RequestError> {
    check_bounds("size_m", request.size_m, SIZE_RANGE_M)?;
    check_bounds("speed_km_s", request.speed_km_s, SPEED_RANGE_KM_S)?;
    check_bounds("angle_deg", request.angle_deg, ANGLE_RANGE_DEG)?;
    check_bounds("lat", request.lat, LATITUDE_RANGE_DEG)?;
    check_bounds("lon", request.lon, LONGITUDE_RANGE_DEG)?;

    let params = AsteroidParams {
        diameter_m: request.size_m,
        velocity_km_s: request.speed_km_s,
        entry_angle_deg: request.angle_deg,
        density_kg_m3: request.density_kg_m3,
    };
    let location = ImpactLocation {
        latitude: request.lat,
        longitude: request.lon,
    };
    let result = compute_impact(&params, location, config)?;

    Ok(ImpactResponse {
        energy_megatons: round_dp(result.energy_megatons_tnt, 3),
        crater_diameter_km: round_dp(result.crater_diameter_km, 2),
        crater_depth_km: round_dp(result.crater_depth_km, 2),
        damage_zones: result
            .damage_zones
            .iter()
            .map(|zone| DamageZone {
                radius_km: round_dp(zone.radius_km, 2),
                zone_type: zone.zone_type,
            })
            .collect(),
        deaths_estimated: result.casualties_estimated,
        comparison: result.comparison.label,
    })
}

// =============================================================================
// DEFLECTION CONTRACT
// =============================================================================

/// Deflection simulation request. `method` stays a string here; parsing it
/// into the closed enum is where unsupported values are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionRequest {
    /// Asteroid diameter in meters.
    pub size_m: f64,
    /// Mass in kg; estimated from diameter when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    /// Current velocity in km/s.
    pub velocity_km_s: f64,
    /// Warning time in days.
    pub days_until_impact: i64,
    /// One of "kinetic_impactor", "gravity_tractor", "nuclear".
    pub method: String,
}

/// Deflection simulation response, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResponse {
    pub method: DeflectionMethod,
    pub effectiveness_percent: f64,
    pub velocity_change_km_s: f64,
    pub deflection_distance_km: f64,
    pub success_probability_percent: f64,
    pub status: DeflectionStatus,
    pub warnings: Vec<String>,
}

/// Validate a deflection request, resolve the method and run the simulator.
pub fn handle_deflection(
    request: &DeflectionRequest,
    config: &EngineConfig,
) -> Result<DeflectionResponse, RequestError> {
    check_bounds("size_m", request.size_m, SIZE_RANGE_M)?;
    check_bounds("velocity_km_s", request.velocity_km_s, SPEED_RANGE_KM_S)?;
    if request.days_until_impact < 0 {
        return Err(RequestError::OutOfBounds {
            field: "days_until_impact",
            value: request.days_until_impact as f64,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    let method: DeflectionMethod = request.method.parse()?;

    let params = DeflectionParams {
        diameter_m: request.size_m,
        mass_kg: request.mass_kg,
        velocity_km_s: request.velocity_km_s,
        days_until_impact: request.days_until_impact,
        method,
    };
    let result = simulate_deflection(&params, config)?;

    Ok(DeflectionResponse {
        method: result.method,
        effectiveness_percent: result.effectiveness_percent,
        velocity_change_km_s: round_dp(result.velocity_change_km_s, 6),
        deflection_distance_km: round_dp(result.deflection_distance_km, 2),
        success_probability_percent: round_dp(result.success_probability_percent, 2),
        status: result.status,
        warnings: result.advisory_warnings,
    })
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Parse a JSON impact request as delivered by any transport.
pub fn impact_request_from_json(json: &str) -> Result<ImpactRequest, RequestError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON deflection request as delivered by any transport.
pub fn deflection_request_from_json(json: &str) -> Result<DeflectionRequest, RequestError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a response for the wire.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RequestError> {
    Ok(serde_json::to_string(value)?)
}

// =============================================================================
// TESTS
// =============================================================================
