// persist/snapshot.rs
//
// The two persisted JSON documents and the migration from persisted shape
// to runtime shape. They are independent stores updated independently; a
// crash between the two writes can leave them out of sync, which is
// acceptable here. Missing or corrupt documents load as defaults and never
// block startup.

use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::stores::achievements::{Achievement, AchievementStore};
use crate::stores::discovery::DiscoveryStore;

/// Storage key for the discovery counters document.
pub const DISCOVERY_KEY: &str = "orrery-discovery";
/// Storage key for the achievements document.
pub const ACHIEVEMENTS_KEY: &str = "orrery-achievements";

/// Persisted shape of one achievement: only id and flag. Names, icons and
/// conditions are reloaded from the static table and merged by id, so stale
/// persisted copies can never shadow updated rule text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAchievement {
    pub id: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct AchievementsDoc {
    achievements: Vec<SavedAchievement>,
}

/// Load discovery state; anything missing or malformed becomes a fresh
/// profile.
pub fn load_discovery(store: &dyn KeyValueStore) -> DiscoveryStore {
    let Some(raw) = store.read(DISCOVERY_KEY) else {
        return DiscoveryStore::new();
    };
    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("discovery document unreadable, starting fresh: {err}");
            DiscoveryStore::new()
        }
    }
}

pub fn save_discovery(store: &mut dyn KeyValueStore, discovery: &DiscoveryStore) {
    match serde_json::to_string(discovery) {
        Ok(json) => store.write(DISCOVERY_KEY, &json),
        Err(err) => log::warn!("failed to serialize discovery state: {err}"),
    }
}

/// Build the achievement store from the static rule table, merging in
/// persisted unlock flags by id. Ids the table no longer contains are
/// dropped; persisted order and membership are never trusted.
pub fn load_achievements(store: &dyn KeyValueStore, table: Vec<Achievement>) -> AchievementStore {
    let saved = match store.read(ACHIEVEMENTS_KEY) {
        Some(raw) => match serde_json::from_str::<AchievementsDoc>(&raw) {
            Ok(doc) => doc.achievements,
            Err(err) => {
                log::warn!("achievements document unreadable, starting fresh: {err}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let merged = table
        .into_iter()
        .map(|mut rule| {
            if let Some(prior) = saved.iter().find(|s| s.id == rule.id) {
                rule.unlocked = prior.unlocked;
            }
            rule
        })
        .collect();
    AchievementStore::new(merged)
}

pub fn save_achievements(store: &mut dyn KeyValueStore, achievements: &AchievementStore) {
    let doc = AchievementsDoc {
        achievements: achievements
            .all()
            .iter()
            .map(|a| SavedAchievement {
                id: a.id.clone(),
                unlocked: a.unlocked,
            })
            .collect(),
    };
    match serde_json::to_string(&doc) {
        Ok(json) => store.write(ACHIEVEMENTS_KEY, &json),
        Err(err) => log::warn!("failed to serialize achievements: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_achievements;
    use crate::persist::store::MemoryStore;

    #[test]
    fn missing_documents_load_as_fresh_state() {
        let store = MemoryStore::new();
        let discovery = load_discovery(&store);
        assert_eq!(discovery.discovered_count(), 0);
        let achievements = load_achievements(&store, default_achievements());
        assert_eq!(achievements.unlocked_count(), 0);
    }

    #[test]
    fn corrupt_documents_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.write(DISCOVERY_KEY, "{not json");
        store.write(ACHIEVEMENTS_KEY, "[]");
        assert_eq!(load_discovery(&store).discovered_count(), 0);
        let achievements = load_achievements(&store, default_achievements());
        assert_eq!(achievements.unlocked_count(), 0);
    }

    #[test]
    fn discovery_round_trips() {
        let mut store = MemoryStore::new();
        let mut discovery = DiscoveryStore::new();
        discovery.discover("skill-java");
        discovery.record_secret();
        discovery.record_visit_event(1234);
        save_discovery(&mut store, &discovery);

        let loaded = load_discovery(&store);
        assert!(loaded.is_discovered("skill-java"));
        assert_eq!(loaded.secrets_found, 1);
        assert_eq!(loaded.recent_visit_ms, vec![1234]);
    }

    #[test]
    fn achievements_merge_by_id_not_order() {
        let mut store = MemoryStore::new();
        // Persisted doc lists ids in scrambled order, with one unknown id.
        store.write(
            ACHIEVEMENTS_KEY,
            r#"{ "achievements": [
                { "id": "ghost-of-old-build", "unlocked": true },
                { "id": "explorer", "unlocked": true }
            ]}"#,
        );
        let achievements = load_achievements(&store, default_achievements());
        assert!(achievements.get("explorer").unwrap().unlocked);
        assert!(!achievements.get("first-contact").unwrap().unlocked);
        // The stale id was dropped, not resurrected.
        assert!(achievements.get("ghost-of-old-build").is_none());
    }

    #[test]
    fn achievements_persist_only_id_and_flag() {
        let mut store = MemoryStore::new();
        let mut achievements = AchievementStore::new(default_achievements());
        achievements.unlock("first-contact");
        save_achievements(&mut store, &achievements);

        let raw = store.read(ACHIEVEMENTS_KEY).unwrap();
        assert!(raw.contains("first-contact"));
        // Display fields stay out of the persisted document.
        assert!(!raw.contains("Discover your first node"));

        let reloaded = load_achievements(&store, default_achievements());
        assert!(reloaded.get("first-contact").unwrap().unlocked);
        assert_eq!(reloaded.unlocked_count(), 1);
    }
}
