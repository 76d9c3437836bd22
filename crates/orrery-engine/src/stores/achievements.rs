// stores/achievements.rs
//
// One-shot achievement unlocks driven by a static rule table. Each rule
// fires exactly once, irreversibly, when its counter reaches the threshold.

use serde::{Deserialize, Serialize};

use crate::content::nodes::UnlockCondition;

/// One achievement rule. `condition` is `"category:threshold"`, checked
/// lazily whenever the matching counter changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub condition: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub reward: Option<String>,
}

/// The rule table plus the most recent unlock (for the popup).
pub struct AchievementStore {
    achievements: Vec<Achievement>,
    recent_unlock: Option<Achievement>,
}

impl AchievementStore {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements,
            recent_unlock: None,
        }
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Evaluate all still-locked rules for `category` against `value`, in
    /// table order, and unlock the first whose threshold is met.
    ///
    /// At most one rule fires per call: callers invoke this once per
    /// counter change, so a counter that jumps by more than one can leave
    /// intermediate thresholds unfired until the counter moves again. That
    /// matches the shipped behavior and is left as-is deliberately.
    pub fn check_and_unlock(&mut self, category: &str, value: u32) -> Option<&Achievement> {
        let idx = self.achievements.iter().position(|a| {
            if a.unlocked {
                return false;
            }
            match UnlockCondition::parse(&a.condition) {
                Some(cond) => cond.category == category && value >= cond.threshold,
                None => false,
            }
        })?;
        let id = self.achievements[idx].id.clone();
        self.unlock(&id);
        self.recent_unlock.as_ref()
    }

    /// Unlock by id. Re-unlocking is a no-op: the popup state keeps the
    /// first unlock and the flag never flips back.
    pub fn unlock(&mut self, id: &str) -> bool {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        if achievement.unlocked {
            return false;
        }
        achievement.unlocked = true;
        log::info!("achievement unlocked: {}", achievement.id);
        self.recent_unlock = Some(achievement.clone());
        true
    }

    /// The unlock awaiting popup display, if any.
    pub fn recent_unlock(&self) -> Option<&Achievement> {
        self.recent_unlock.as_ref()
    }

    pub fn clear_recent_unlock(&mut self) {
        self.recent_unlock = None;
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Relock everything (explicit profile reset).
    pub fn reset(&mut self) {
        for a in &mut self.achievements {
            a.unlocked = false;
        }
        self.recent_unlock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Achievement> {
        let rule = |id: &str, condition: &str| Achievement {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: String::new(),
            condition: condition.to_string(),
            unlocked: false,
            reward: None,
        };
        vec![
            rule("first", "nodes:1"),
            rule("tenth", "nodes:10"),
            rule("sneaky", "secrets:1"),
        ]
    }

    #[test]
    fn unlocks_when_threshold_reached() {
        let mut store = AchievementStore::new(table());
        assert!(store.check_and_unlock("nodes", 0).is_none());
        let unlocked = store.check_and_unlock("nodes", 1).unwrap();
        assert_eq!(unlocked.id, "first");
        assert_eq!(store.unlocked_count(), 1);
    }

    #[test]
    fn one_rule_per_call_even_when_both_qualify() {
        let mut store = AchievementStore::new(table());
        // A counter jump past both thresholds: only the first table entry
        // fires on this call, the second on the next.
        let first = store.check_and_unlock("nodes", 12).unwrap();
        assert_eq!(first.id, "first");
        let second = store.check_and_unlock("nodes", 12).unwrap();
        assert_eq!(second.id, "tenth");
        assert!(store.check_and_unlock("nodes", 12).is_none());
    }

    #[test]
    fn categories_are_independent() {
        let mut store = AchievementStore::new(table());
        let unlocked = store.check_and_unlock("secrets", 5).unwrap();
        assert_eq!(unlocked.id, "sneaky");
        assert!(!store.get("first").unwrap().unlocked);
    }

    #[test]
    fn double_unlock_is_a_noop_and_keeps_first_popup() {
        let mut store = AchievementStore::new(table());
        assert!(store.unlock("first"));
        store.clear_recent_unlock();
        assert!(!store.unlock("first"));
        // Second call must not re-arm the popup.
        assert!(store.recent_unlock().is_none());
        assert_eq!(store.unlocked_count(), 1);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = AchievementStore::new(table());
        assert!(!store.unlock("nope"));
        assert!(store.recent_unlock().is_none());
    }

    #[test]
    fn malformed_condition_never_fires() {
        let mut store = AchievementStore::new(vec![Achievement {
            id: "broken".to_string(),
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            condition: "what".to_string(),
            unlocked: false,
            reward: None,
        }]);
        assert!(store.check_and_unlock("what", 999).is_none());
    }

    #[test]
    fn reset_relocks_everything() {
        let mut store = AchievementStore::new(table());
        store.unlock("first");
        store.unlock("sneaky");
        store.reset();
        assert_eq!(store.unlocked_count(), 0);
        assert!(store.recent_unlock().is_none());
    }
}
