// input/mod.rs
//
// The keyboard/pointer surface: event queue, global key bindings, and the
// easter-egg sequence matcher.

pub mod bindings;
pub mod konami;
pub mod queue;

pub use bindings::{map_key, UiAction};
pub use konami::SequenceDetector;
pub use queue::{InputEvent, InputQueue, KeyInput};
