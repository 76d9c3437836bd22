// bodies/positions.rs
//
// Per-frame world positions for every body in the registry, keyed by stable
// identifier. Recomputed in a single pass each tick, before the camera reads
// anything — a camera chasing a moving body must never see last frame's
// coordinates.

use std::collections::HashMap;

use glam::Vec3;

use super::config::STATION_DRIFT_SPEED;
use super::registry::SystemRegistry;
use crate::core::orbit::{circular_position, elliptical_position, moon_position, orbit_angle};

/// Latest computed position of every positioned body.
///
/// Moons are stored under the composite key `parentId/moonId` (see
/// [`SystemRegistry::moon_key`]); everything else under its own id. Nebulae
/// never move, so they are kept in a side table built once.
pub struct PositionTable {
    positions: HashMap<String, Vec3>,
    /// bare moon id → composite key of its first occurrence.
    moon_aliases: HashMap<String, String>,
    /// nebula id → fixed position.
    nebulae: HashMap<String, Vec3>,
}

impl PositionTable {
    pub fn new(registry: &SystemRegistry) -> Self {
        let nebulae = registry
            .nebulae
            .iter()
            .map(|n| (n.node_id.clone(), Vec3::from(n.position)))
            .collect();
        Self {
            positions: HashMap::new(),
            moon_aliases: registry.moon_alias_table(),
            nebulae,
        }
    }

    /// Recompute every moving body for the given elapsed time.
    pub fn update(&mut self, registry: &SystemRegistry, elapsed: f32) {
        for planet in &registry.planets {
            let angle = orbit_angle(planet.start_angle, planet.orbit_speed, elapsed);
            let pos = circular_position(planet.orbit_radius, angle, planet.tilt);
            self.positions.insert(planet.id.clone(), pos);

            // Moons orbit the position just computed — the parent moves and
            // the moon circles the moving point.
            for moon in &planet.moons {
                let moon_angle = orbit_angle(moon.start_angle, moon.orbit_speed, elapsed);
                let moon_pos = moon_position(pos, moon.orbit_radius, moon_angle);
                self.positions
                    .insert(SystemRegistry::moon_key(&planet.id, &moon.node_id), moon_pos);
            }
        }

        for station in &registry.stations {
            let angle = orbit_angle(station.angle, STATION_DRIFT_SPEED, elapsed);
            self.positions.insert(
                station.node_id.clone(),
                Vec3::new(
                    station.orbit_radius * angle.cos(),
                    station.height,
                    station.orbit_radius * angle.sin(),
                ),
            );
        }

        for comet in &registry.comets {
            let angle = orbit_angle(comet.start_angle, comet.speed, elapsed);
            self.positions.insert(
                comet.node_id.clone(),
                elliptical_position(comet.orbit_radius, comet.eccentricity, angle, comet.tilt),
            );
        }
    }

    /// Raw lookup by exact key (planet id, composite moon key, station or
    /// comet node id).
    pub fn get(&self, key: &str) -> Option<Vec3> {
        self.positions.get(key).copied()
    }

    /// Resolve an arbitrary node identifier to its current position.
    ///
    /// Checks, in order: nebulae (static, keyed directly), the moon alias
    /// table, then a direct key lookup. `None` means the body is not
    /// positioned this frame — callers hide the visual element rather than
    /// treating it as an error.
    pub fn position_of(&self, node_id: &str) -> Option<Vec3> {
        if let Some(pos) = self.nebulae.get(node_id) {
            return Some(*pos);
        }
        if let Some(key) = self.moon_aliases.get(node_id) {
            return self.positions.get(key).copied();
        }
        self.positions.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
