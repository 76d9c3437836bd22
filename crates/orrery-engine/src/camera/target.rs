// camera/target.rs
//
// Resolving an opaque node identifier to a strongly-typed, trackable body.
// Every consumer matches exhaustively, so adding a body kind forces every
// call site to say what it does with it.

use glam::Vec3;

use crate::bodies::{
    CometConfig, MoonConfig, PlanetConfig, StationConfig, SystemRegistry, STATION_DRIFT_SPEED,
};
use crate::content::ContentCatalog;
use crate::core::orbit::{circular_position, elliptical_position, moon_position, orbit_angle};

/// Node id of the identity node at the world origin.
pub const CORE_NODE_ID: &str = "core-self";

/// A resolved, trackable reference to the body backing a focused node.
#[derive(Debug, Clone)]
pub enum TrackingTarget {
    Planet(PlanetConfig),
    /// A moon together with the planet it was resolved under. The same
    /// skill id can orbit several planets; the parent decides which copy.
    Moon {
        moon: MoonConfig,
        parent: PlanetConfig,
    },
    Station(StationConfig),
    Comet(CometConfig),
    Nebula {
        position: Vec3,
        size: f32,
    },
    Static(Vec3),
}

/// Resolve a node id against the registry.
///
/// Checked in order: planet, station, moon, comet, nebula, fallback. Planets
/// and stations are globally unique so the order never matters for them;
/// moons are the one ambiguous case, disambiguated by `preferred_parent`
/// (the planet the user last clicked under). Without a hint the first
/// planet in registry order wins. Unknown ids fall back to a static point —
/// resolution never fails.
pub fn resolve_target(
    node_id: &str,
    registry: &SystemRegistry,
    catalog: &ContentCatalog,
    preferred_parent: Option<&str>,
) -> TrackingTarget {
    if let Some(planet) = registry.planet(node_id) {
        return TrackingTarget::Planet(planet.clone());
    }

    if let Some(station) = registry.station(node_id) {
        return TrackingTarget::Station(station.clone());
    }

    if let Some(parent_id) = preferred_parent {
        if let Some((parent, moon)) = registry.moon_of(parent_id, node_id) {
            return TrackingTarget::Moon {
                moon: moon.clone(),
                parent: parent.clone(),
            };
        }
    }
    if let Some((parent, moon)) = registry.find_moon(node_id) {
        return TrackingTarget::Moon {
            moon: moon.clone(),
            parent: parent.clone(),
        };
    }

    if let Some(comet) = registry.comet(node_id) {
        return TrackingTarget::Comet(comet.clone());
    }

    if let Some(nebula) = registry.nebula(node_id) {
        return TrackingTarget::Nebula {
            position: Vec3::from(nebula.position),
            size: nebula.size,
        };
    }

    if node_id == CORE_NODE_ID {
        return TrackingTarget::Static(Vec3::ZERO);
    }
    let position = catalog
        .node(node_id)
        .and_then(|n| n.position)
        .map(Vec3::from)
        .unwrap_or(Vec3::ZERO);
    TrackingTarget::Static(position)
}

impl TrackingTarget {
    /// World position at the given elapsed simulation time.
    pub fn position(&self, elapsed: f32) -> Vec3 {
        match self {
            TrackingTarget::Planet(p) => {
                let angle = orbit_angle(p.start_angle, p.orbit_speed, elapsed);
                circular_position(p.orbit_radius, angle, p.tilt)
            }
            TrackingTarget::Moon { moon, parent } => {
                let parent_angle = orbit_angle(parent.start_angle, parent.orbit_speed, elapsed);
                let parent_pos = circular_position(parent.orbit_radius, parent_angle, parent.tilt);
                let moon_angle = orbit_angle(moon.start_angle, moon.orbit_speed, elapsed);
                moon_position(parent_pos, moon.orbit_radius, moon_angle)
            }
            TrackingTarget::Station(s) => {
                let angle = orbit_angle(s.angle, STATION_DRIFT_SPEED, elapsed);
                Vec3::new(
                    s.orbit_radius * angle.cos(),
                    s.height,
                    s.orbit_radius * angle.sin(),
                )
            }
            TrackingTarget::Comet(c) => {
                let angle = orbit_angle(c.start_angle, c.speed, elapsed);
                elliptical_position(c.orbit_radius, c.eccentricity, angle, c.tilt)
            }
            TrackingTarget::Nebula { position, .. } => *position,
            TrackingTarget::Static(position) => *position,
        }
    }

    /// How far back the camera should sit from this body.
    pub fn view_distance(&self) -> f32 {
        match self {
            TrackingTarget::Planet(p) => 10.0 + p.size * 4.0,
            TrackingTarget::Moon { moon, .. } => 4.0 + moon.size * 12.0,
            TrackingTarget::Station(s) => 6.0 + s.size * 5.0,
            TrackingTarget::Comet(_) => 8.0,
            TrackingTarget::Nebula { size, .. } => size * 4.0,
            TrackingTarget::Static(_) => 15.0,
        }
    }

    /// Whether this body moves and needs per-frame camera tracking.
    pub fn needs_tracking(&self) -> bool {
        match self {
            TrackingTarget::Planet(_)
            | TrackingTarget::Moon { .. }
            | TrackingTarget::Station(_)
            | TrackingTarget::Comet(_) => true,
            TrackingTarget::Nebula { .. } | TrackingTarget::Static(_) => false,
        }
    }
}
