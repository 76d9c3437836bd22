// bridge/frame.rs
//
// Per-frame data handed to the renderer: a Pod camera-pose block and a flat
// f32 position buffer in a key order fixed at startup. The JS side reads
// the key list once, then indexes the buffer by position every frame.

use bytemuck::{Pod, Zeroable};

use crate::bodies::{PositionTable, SystemRegistry};
use crate::camera::CameraPose;

/// Floats per body slot: x, y, z, visible (1.0 / 0.0).
/// A zeroed visible flag means "hide this element this frame" — absence is
/// not an error.
pub const BODY_FLOATS: usize = 4;

/// Camera pose as shared with the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraPoseBlock {
    pub position: [f32; 3],
    /// 1.0 while a fly-to transition is active (manual input disabled).
    pub flying: f32,
    pub target: [f32; 3],
    pub _pad: f32,
}

/// Fixed-order frame buffer for body positions plus the camera block.
pub struct FrameBuffer {
    keys: Vec<String>,
    positions: Vec<f32>,
    pose: CameraPoseBlock,
}

impl FrameBuffer {
    /// Build the key order from the registry: planets, moons (composite
    /// keys), stations, comets, nebulae. Stable for the whole session.
    pub fn new(registry: &SystemRegistry) -> Self {
        let mut keys = Vec::new();
        for planet in &registry.planets {
            keys.push(planet.id.clone());
            for moon in &planet.moons {
                keys.push(SystemRegistry::moon_key(&planet.id, &moon.node_id));
            }
        }
        for station in &registry.stations {
            keys.push(station.node_id.clone());
        }
        for comet in &registry.comets {
            keys.push(comet.node_id.clone());
        }
        for nebula in &registry.nebulae {
            keys.push(nebula.node_id.clone());
        }

        let positions = vec![0.0; keys.len() * BODY_FLOATS];
        Self {
            keys,
            positions,
            pose: CameraPoseBlock::default(),
        }
    }

    /// Repack the buffer from this frame's position table and camera pose.
    pub fn rebuild(&mut self, table: &PositionTable, pose: CameraPose, flying: bool) {
        for (i, key) in self.keys.iter().enumerate() {
            let slot = &mut self.positions[i * BODY_FLOATS..(i + 1) * BODY_FLOATS];
            match table.position_of(key) {
                Some(p) => {
                    slot[0] = p.x;
                    slot[1] = p.y;
                    slot[2] = p.z;
                    slot[3] = 1.0;
                }
                None => {
                    slot[0] = 0.0;
                    slot[1] = 0.0;
                    slot[2] = 0.0;
                    slot[3] = 0.0;
                }
            }
        }
        self.pose = CameraPoseBlock {
            position: pose.position.to_array(),
            flying: if flying { 1.0 } else { 0.0 },
            target: pose.target.to_array(),
            _pad: 0.0,
        };
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The key list as JSON, read once by the renderer at init.
    pub fn keys_json(&self) -> String {
        serde_json::to_string(&self.keys).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn body_count(&self) -> usize {
        self.keys.len()
    }

    pub fn pose(&self) -> &CameraPoseBlock {
        &self.pose
    }

    pub fn pose_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.pose).as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::default_registry;
    use glam::Vec3;

    #[test]
    fn key_order_covers_every_body() {
        let reg = default_registry();
        let frame = FrameBuffer::new(&reg);
        let moons: usize = reg.planets.iter().map(|p| p.moons.len()).sum();
        let expected =
            reg.planets.len() + moons + reg.stations.len() + reg.comets.len() + reg.nebulae.len();
        assert_eq!(frame.body_count(), expected);
        assert_eq!(frame.positions().len(), expected * BODY_FLOATS);
        // Composite moon keys, not bare skill ids.
        assert!(frame.keys().iter().any(|k| k == "experience-education/skill-git"));
        assert!(!frame.keys().iter().any(|k| k == "skill-git"));
    }

    #[test]
    fn rebuild_marks_every_default_body_visible() {
        let reg = default_registry();
        let mut table = PositionTable::new(&reg);
        table.update(&reg, 4.0);
        let mut frame = FrameBuffer::new(&reg);
        frame.rebuild(
            &table,
            CameraPose::new(Vec3::new(0.0, 40.0, 90.0), Vec3::ZERO),
            false,
        );
        for slot in frame.positions().chunks(BODY_FLOATS) {
            assert_eq!(slot[3], 1.0, "all default bodies are positioned");
        }
        assert_eq!(frame.pose().flying, 0.0);
        assert_eq!(frame.pose().position, [0.0, 40.0, 90.0]);
    }

    #[test]
    fn nebula_slots_carry_their_static_positions() {
        let reg = default_registry();
        let table = PositionTable::new(&reg);
        let mut frame = FrameBuffer::new(&reg);
        frame.rebuild(&table, CameraPose::new(Vec3::ZERO, Vec3::ZERO), true);

        let idx = frame
            .keys()
            .iter()
            .position(|k| k == "philosophy-simplicity")
            .unwrap();
        let slot = &frame.positions()[idx * BODY_FLOATS..(idx + 1) * BODY_FLOATS];
        assert_eq!(&slot[..3], &[-100.0, 20.0, -70.0]);
        assert_eq!(frame.pose().flying, 1.0);

        // Moving bodies have no entry before the first update pass.
        let planet_idx = frame
            .keys()
            .iter()
            .position(|k| k == "experience-education")
            .unwrap();
        let planet_slot = &frame.positions()[planet_idx * BODY_FLOATS..];
        assert_eq!(planet_slot[3], 0.0);
    }

    #[test]
    fn keys_json_is_parseable() {
        let frame = FrameBuffer::new(&default_registry());
        let parsed: Vec<String> = serde_json::from_str(&frame.keys_json()).unwrap();
        assert_eq!(parsed.len(), frame.body_count());
    }
}
