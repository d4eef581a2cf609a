// Astrodefend - Asteroid Impact & Deflection Physics Engine
// Stateless calculators for strike consequences and mitigation missions

pub mod api;
pub mod classify;
pub mod config;
pub mod deflection;
pub mod error;
pub mod impact;
pub mod taxonomy;

pub use classify::{classify, Comparison, EnergyBand};
pub use config::EngineConfig;
pub use deflection::{
    simulate_deflection, DeflectionMethod, DeflectionParams, DeflectionResult, DeflectionStatus,
};
pub use error::{EngineError, RequestError};
pub use impact::{
    compute_impact, AsteroidParams, DamageZone, ImpactLocation, ImpactResult, ZoneType,
};
