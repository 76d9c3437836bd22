pub mod api;
pub mod bodies;
pub mod bridge;
pub mod camera;
pub mod content;
pub mod core;
pub mod input;
pub mod persist;
pub mod stores;

// Re-export key types at crate root for convenience
pub use api::app::{Orrery, OrreryConfig};
pub use api::types::AppEvent;
pub use bodies::{
    belt_points, default_registry, BeltConfig, CometConfig, MoonConfig, NebulaConfig, PlanetConfig,
    PositionTable, StationConfig, SunConfig, SystemRegistry, STATION_DRIFT_SPEED,
};
pub use bridge::{CameraPoseBlock, FrameBuffer, BODY_FLOATS};
pub use camera::{
    resolve_target, CameraDirector, CameraPose, CameraTuning, Easing, TrackingTarget, CORE_NODE_ID,
};
pub use content::{
    default_achievements, default_catalog, Connection, ContentCatalog, GraphNode, NodeKind,
    UnlockCondition,
};
pub use core::orbit::{
    circular_position, elliptical_position, moon_position, orbit_angle, orbit_path_samples,
};
pub use core::time::SimClock;
pub use core::timers::{TimerId, TimerQueue};
pub use input::{map_key, InputEvent, InputQueue, KeyInput, SequenceDetector, UiAction};
pub use persist::{KeyValueStore, MemoryStore, ACHIEVEMENTS_KEY, DISCOVERY_KEY};
pub use stores::{
    Achievement, AchievementStore, DiscoveryStore, EffectsState, FocusMode, GraphStore,
    NavigationStore, NodeState, TerminalStore,
};
