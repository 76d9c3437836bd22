// persist/mod.rs
//
// Client-storage persistence: a storage trait the host implements, plus
// the versioned snapshot/merge layer for the two persisted documents.

pub mod snapshot;
pub mod store;

pub use snapshot::{
    load_achievements, load_discovery, save_achievements, save_discovery, SavedAchievement,
    ACHIEVEMENTS_KEY, DISCOVERY_KEY,
};
pub use store::{KeyValueStore, MemoryStore};
