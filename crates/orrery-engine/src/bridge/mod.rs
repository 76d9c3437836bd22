// bridge/mod.rs
//
// Wire-format data shared with the renderer on the other side of the WASM
// boundary.

pub mod frame;

pub use frame::{CameraPoseBlock, FrameBuffer, BODY_FLOATS};
