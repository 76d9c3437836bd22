// camera/mod.rs
//
// Target resolution and the fly-to/follow camera state machine.

pub mod controller;
pub mod easing;
pub mod target;

pub use controller::{CameraDirector, CameraPose, CameraTuning};
pub use easing::{ease_vec3, lerp, lerp_vec3, Easing};
pub use target::{resolve_target, TrackingTarget, CORE_NODE_ID};
