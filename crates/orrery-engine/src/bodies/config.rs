// bodies/config.rs
//
// Declarative descriptions of every celestial body. The registry built from
// these is immutable for the life of the process — loaded once at startup,
// read by every other subsystem, mutated by none.

use serde::{Deserialize, Serialize};

/// Angular drift rate shared by all project stations (rad per second of
/// simulation time). Stations orbit far slower than planets.
pub const STATION_DRIFT_SPEED: f32 = 0.003;

/// A position held at a company, shown on the planet's label card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub title: String,
    /// Free-form duration, e.g. "Feb 2023 - Present".
    pub duration: String,
}

/// A planet: one company/organization on the career timeline.
/// `id` must match an experience node in the content catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
    /// Distance from the sun (bigger = further out).
    pub orbit_radius: f32,
    pub size: f32,
    pub color: String,
    /// Angular rate in rad/s of simulation time.
    pub orbit_speed: f32,
    pub rotation_speed: f32,
    /// Orbit plane tilt about the X axis, radians.
    #[serde(default)]
    pub tilt: f32,
    #[serde(default)]
    pub has_ring: bool,
    #[serde(default)]
    pub ring_color: Option<String>,
    /// Initial position on the orbit, radians.
    #[serde(default)]
    pub start_angle: f32,
    /// Skills used at this company. Moon node ids are NOT unique across
    /// planets — the same skill may orbit several of them.
    #[serde(default)]
    pub moons: Vec<MoonConfig>,
}

/// A moon: one skill orbiting the planet it was used at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonConfig {
    pub node_id: String,
    pub label: String,
    /// Distance from the parent planet, not from the sun.
    pub orbit_radius: f32,
    pub size: f32,
    pub color: String,
    pub orbit_speed: f32,
    #[serde(default)]
    pub start_angle: f32,
}

/// A project station drifting through the asteroid belt at a fixed height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub node_id: String,
    pub label: String,
    pub orbit_radius: f32,
    pub size: f32,
    pub color: String,
    /// Base angle; the station drifts from here at [`STATION_DRIFT_SPEED`].
    pub angle: f32,
    /// Fixed vertical offset from the orbital plane.
    #[serde(default)]
    pub height: f32,
}

/// A nebula: a philosophy note as a distant, non-moving background cloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NebulaConfig {
    pub node_id: String,
    pub label: String,
    pub position: [f32; 3],
    pub color: String,
    pub size: f32,
    #[serde(default)]
    pub opacity: f32,
}

/// A comet: a hidden note sweeping through on an elliptical orbit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CometConfig {
    pub node_id: String,
    pub label: String,
    pub color: String,
    pub speed: f32,
    /// Semi-major axis of the ellipse.
    pub orbit_radius: f32,
    #[serde(default)]
    pub tilt: f32,
    /// 0 ≤ e < 1; clamped at evaluation if a config pushes past that.
    pub eccentricity: f32,
    #[serde(default)]
    pub start_angle: f32,
}

/// The sun at the center — the visitor's own identity node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunConfig {
    pub size: f32,
    pub color: String,
    pub corona_color: String,
    pub light_intensity: f32,
    pub pulse_speed: f32,
    pub pulse_amplitude: f32,
}

/// Decorative asteroid belt between the outer orbits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeltConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub count: usize,
    /// Vertical scatter around the orbital plane.
    pub y_spread: f32,
}
