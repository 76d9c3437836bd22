// stores/mod.rs
//
// One explicitly-constructed state container per concern, each owned by the
// aggregate and mutated only through its own operations. No ambient
// singletons; every store has a reset for teardown and tests.

pub mod achievements;
pub mod discovery;
pub mod effects;
pub mod graph;
pub mod navigation;
pub mod terminal;

pub use achievements::{Achievement, AchievementStore};
pub use discovery::DiscoveryStore;
pub use effects::{EffectTimer, EffectsState};
pub use graph::{GraphStore, NodeState};
pub use navigation::{FocusMode, NavigationStore};
pub use terminal::{EntryKind, TerminalStore, TranscriptEntry};
