// bodies/registry.rs
//
// The registry of every celestial body, with name-based lookup.
// Built once at startup (from the built-in catalog or a JSON override) and
// read-only afterwards.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::{
    BeltConfig, CometConfig, MoonConfig, NebulaConfig, PlanetConfig, StationConfig, SunConfig,
};

/// Complete body registry for one solar system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemRegistry {
    pub sun: SunConfig,
    pub planets: Vec<PlanetConfig>,
    #[serde(default)]
    pub stations: Vec<StationConfig>,
    #[serde(default)]
    pub comets: Vec<CometConfig>,
    #[serde(default)]
    pub nebulae: Vec<NebulaConfig>,
    pub belt: BeltConfig,
}

impl SystemRegistry {
    /// Parse a registry from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn planet(&self, id: &str) -> Option<&PlanetConfig> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn station(&self, node_id: &str) -> Option<&StationConfig> {
        self.stations.iter().find(|s| s.node_id == node_id)
    }

    pub fn comet(&self, node_id: &str) -> Option<&CometConfig> {
        self.comets.iter().find(|c| c.node_id == node_id)
    }

    pub fn nebula(&self, node_id: &str) -> Option<&NebulaConfig> {
        self.nebulae.iter().find(|n| n.node_id == node_id)
    }

    /// Find a moon under a specific parent planet.
    pub fn moon_of(&self, parent_id: &str, node_id: &str) -> Option<(&PlanetConfig, &MoonConfig)> {
        let parent = self.planet(parent_id)?;
        let moon = parent.moons.iter().find(|m| m.node_id == node_id)?;
        Some((parent, moon))
    }

    /// Find a moon by node id alone, scanning planets in registry order.
    /// First match wins — the same skill can orbit multiple planets, so
    /// callers that know the parent should use [`moon_of`](Self::moon_of).
    pub fn find_moon(&self, node_id: &str) -> Option<(&PlanetConfig, &MoonConfig)> {
        for planet in &self.planets {
            if let Some(moon) = planet.moons.iter().find(|m| m.node_id == node_id) {
                return Some((planet, moon));
            }
        }
        None
    }

    /// Composite position key for a moon. Bare moon ids would collide when
    /// the same skill orbits two planets.
    pub fn moon_key(parent_id: &str, node_id: &str) -> String {
        format!("{parent_id}/{node_id}")
    }

    /// Bare moon id → composite key of its first occurrence, in registry
    /// order. Built once; used to resolve positions for ids that arrive
    /// without a parent.
    pub fn moon_alias_table(&self) -> HashMap<String, String> {
        let mut table = HashMap::new();
        for planet in &self.planets {
            for moon in &planet.moons {
                table
                    .entry(moon.node_id.clone())
                    .or_insert_with(|| Self::moon_key(&planet.id, &moon.node_id));
            }
        }
        table
    }
}

// ── Asteroid belt scatter ────────────────────────────────────────────

/// Deterministic integer hash for belt generation (no rand dependency —
/// every client must scatter the same belt).
pub fn scatter_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Generate static positions for the decorative belt rocks.
pub fn belt_points(belt: &BeltConfig) -> Vec<Vec3> {
    let frac = |h: u32| (h as f32) / (u32::MAX as f32);
    let mut points = Vec::with_capacity(belt.count);
    for i in 0..belt.count {
        let h1 = scatter_hash(i as u32 * 7 + 31);
        let h2 = scatter_hash(i as u32 * 13 + 97);
        let h3 = scatter_hash(i as u32 * 19 + 151);

        let radius = belt.inner_radius + frac(h1) * (belt.outer_radius - belt.inner_radius);
        let angle = frac(h2) * std::f32::consts::TAU;
        let y = (frac(h3) - 0.5) * 2.0 * belt.y_spread;
        points.push(Vec3::new(radius * angle.cos(), y, radius * angle.sin()));
    }
    points
}
