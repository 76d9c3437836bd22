// bodies/mod.rs
//
// Static body configuration and per-frame position resolution.
// The registry is read-only after startup; the position table is the only
// mutable piece and is rebuilt every tick.

pub mod catalog;
pub mod config;
pub mod positions;
pub mod registry;

pub use catalog::default_registry;
pub use config::{
    BeltConfig, CometConfig, MoonConfig, NebulaConfig, PlanetConfig, RoleConfig, StationConfig,
    SunConfig, STATION_DRIFT_SPEED,
};
pub use positions::PositionTable;
pub use registry::{belt_points, scatter_hash, SystemRegistry};
