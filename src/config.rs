// Engine Configuration - Physical constants and policy thresholds
// Replaces the module-level globals of earlier revisions with an immutable
// per-call value

use serde::{Deserialize, Serialize};

/// Physical constants and policy thresholds for one engine call.
///
/// Every calculation takes a reference to one of these instead of reading
/// process-wide globals, so tests and callers with better data (for example a
/// real population-density service) can exercise alternative assumptions
/// without mutating shared state. `EngineConfig::default()` is the canonical
/// model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Impactor bulk density assumed when the caller supplies none (kg/m³).
    /// S-type rocky average.
    pub asteroid_density_kg_m3: f64,

    /// Density of the impacted surface (kg/m³). Continental crust.
    pub target_density_kg_m3: f64,

    /// TNT-equivalent conversion (joules per megaton).
    pub joules_per_megaton: f64,

    /// Flat population density assumed inside the lethal zone (people/km²).
    /// Stand-in for a real population lookup, which is the caller's concern.
    pub population_density_per_km2: f64,

    /// Fraction of the population inside the lethal zone that does not
    /// survive.
    pub casualty_rate: f64,

    /// Apply size-tiered atmospheric entry deceleration before the energy
    /// calculation (Collins et al. 2005, simplified). Off in the canonical
    /// model: energy is then a pure function of the given entry velocity.
    pub atmospheric_entry: bool,

    /// Earth radius (km), the yardstick for deflection effectiveness.
    pub earth_radius_km: f64,

    /// Nuclear device yield (megatons TNT).
    pub nuclear_yield_megatons: f64,

    /// Fraction of nuclear yield coupled into asteroid kinetic energy.
    pub nuclear_coupling: f64,

    /// Below this diameter (m) a nuclear device draws the excessive-force
    /// advisory.
    pub excessive_force_diameter_m: f64,

    /// Below this many days every method draws the short-lead-time advisory.
    pub short_lead_time_days: i64,

    /// Success probability at or above which a deflection counts as a full
    /// success (%).
    pub success_threshold_percent: f64,

    /// Success probability at or above which a deflection counts as partial
    /// (%). Anything lower is a failure.
    pub partial_threshold_percent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            asteroid_density_kg_m3: 3000.0,
            target_density_kg_m3: 2500.0,
            joules_per_megaton: 4.184e15,
            population_density_per_km2: 1000.0,
            casualty_rate: 0.7,
            atmospheric_entry: false,
            earth_radius_km: 6371.0,
            nuclear_yield_megatons: 1.0,
            nuclear_coupling: 0.1,
            excessive_force_diameter_m: 200.0,
            short_lead_time_days: 30,
            success_threshold_percent: 70.0,
            partial_threshold_percent: 40.0,
        }
    }
}
