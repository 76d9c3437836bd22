// stores/discovery.rs
//
// Exploration progress: which nodes have been seen, session counters, and
// the visit-rate window. Persisted in full as one JSON document; every
// field tolerates absence so a partial document from an older build still
// loads.
//
// Timestamps are wall-clock milliseconds supplied by the host — the store
// never reads a clock itself, which keeps every rate computation testable.

use serde::{Deserialize, Serialize};

/// Stored visit timestamps are capped at this many entries; the 60-second
/// rate window is applied separately at read time.
pub const RECENT_VISIT_CAP: usize = 20;

const RATE_WINDOW_MS: u64 = 60_000;

/// All discovery/session state. Membership in the id lists is what matters;
/// their order is incidental.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryStore {
    pub discovered: Vec<String>,
    pub visited: Vec<String>,
    pub total_clicks: u32,
    pub terminal_commands_used: u32,
    pub secrets_found: u32,
    pub philosophy_read: u32,
    pub connections_followed: u32,
    pub total_visits: u32,
    /// Wall-clock ms when this session started.
    pub start_time_ms: Option<u64>,
    /// Wall-clock ms of the very first visit, ever.
    pub first_visit_ms: Option<u64>,
    pub recent_visit_ms: Vec<u64>,
    pub sun_clicked: bool,
    pub planets_visited: Vec<String>,
    pub projects_visited: Vec<String>,
    pub nebulae_visited: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, id: &str) {
    if !list.iter().any(|x| x == id) {
        list.push(id.to_string());
    }
}

impl DiscoveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as discovered. Idempotent.
    pub fn discover(&mut self, id: &str) {
        push_unique(&mut self.discovered, id);
    }

    pub fn is_discovered(&self, id: &str) -> bool {
        self.discovered.iter().any(|x| x == id)
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    /// Mark a node as visited (focused at least once). Idempotent.
    pub fn visit(&mut self, id: &str) {
        push_unique(&mut self.visited, id);
    }

    pub fn record_click(&mut self) {
        self.total_clicks += 1;
    }

    pub fn record_terminal_command(&mut self) {
        self.terminal_commands_used += 1;
    }

    pub fn record_secret(&mut self) {
        self.secrets_found += 1;
    }

    pub fn record_philosophy(&mut self) {
        self.philosophy_read += 1;
    }

    pub fn record_connection_followed(&mut self) {
        self.connections_followed += 1;
    }

    pub fn set_sun_clicked(&mut self) {
        self.sun_clicked = true;
    }

    /// Start the session clock if it isn't already running.
    pub fn start_session(&mut self, now_ms: u64) {
        self.start_time_ms.get_or_insert(now_ms);
    }

    /// Bookkeeping common to every visit: first-ever-visit stamp, total
    /// counter, and the rate-window timestamp (capped at the most recent
    /// [`RECENT_VISIT_CAP`]).
    pub fn record_visit_event(&mut self, now_ms: u64) {
        self.first_visit_ms.get_or_insert(now_ms);
        self.total_visits += 1;
        self.recent_visit_ms.push(now_ms);
        if self.recent_visit_ms.len() > RECENT_VISIT_CAP {
            let excess = self.recent_visit_ms.len() - RECENT_VISIT_CAP;
            self.recent_visit_ms.drain(..excess);
        }
    }

    /// Visits inside the trailing 60-second window. The prune happens here,
    /// at read time — the stored list keeps its own cap independently.
    pub fn nodes_per_minute(&self, now_ms: u64) -> u32 {
        let cutoff = now_ms.saturating_sub(RATE_WINDOW_MS);
        self.recent_visit_ms.iter().filter(|&&t| t > cutoff).count() as u32
    }

    /// Seconds since the session clock started.
    pub fn session_duration_secs(&self, now_ms: u64) -> u64 {
        match self.start_time_ms {
            Some(start) => now_ms.saturating_sub(start) / 1000,
            None => 0,
        }
    }

    pub fn track_planet_visit(&mut self, id: &str) {
        push_unique(&mut self.planets_visited, id);
    }

    pub fn track_project_visit(&mut self, id: &str) {
        push_unique(&mut self.projects_visited, id);
    }

    pub fn track_nebula_visit(&mut self, id: &str) {
        push_unique(&mut self.nebulae_visited, id);
    }

    /// Discovered share of `total`, rounded to whole percent.
    pub fn progress_percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.discovered.len() as f32 / total as f32) * 100.0).round() as u32
    }

    /// Wipe everything back to a fresh profile.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_is_idempotent() {
        let mut store = DiscoveryStore::new();
        store.discover("skill-java");
        store.discover("skill-java");
        assert_eq!(store.discovered_count(), 1);
        assert!(store.is_discovered("skill-java"));
    }

    #[test]
    fn category_sets_deduplicate() {
        let mut store = DiscoveryStore::new();
        store.track_planet_visit("experience-neshan");
        store.track_planet_visit("experience-neshan");
        store.track_planet_visit("experience-education");
        assert_eq!(store.planets_visited.len(), 2);
    }

    #[test]
    fn visit_timestamps_are_capped_at_twenty() {
        let mut store = DiscoveryStore::new();
        for i in 0..30 {
            store.record_visit_event(1000 * i);
        }
        assert_eq!(store.recent_visit_ms.len(), RECENT_VISIT_CAP);
        // The oldest entries were dropped, not the newest.
        assert_eq!(*store.recent_visit_ms.last().unwrap(), 29_000);
        assert_eq!(store.total_visits, 30);
    }

    #[test]
    fn rate_window_prunes_only_at_read_time() {
        let mut store = DiscoveryStore::new();
        store.record_visit_event(0);
        store.record_visit_event(10_000);
        store.record_visit_event(70_000);
        // At t=70s only the visits inside the last minute count...
        assert_eq!(store.nodes_per_minute(70_000), 2);
        // ...but nothing was removed from the stored list.
        assert_eq!(store.recent_visit_ms.len(), 3);
    }

    #[test]
    fn session_clock_starts_once() {
        let mut store = DiscoveryStore::new();
        store.start_session(5_000);
        store.start_session(9_000);
        assert_eq!(store.session_duration_secs(65_000), 60);
    }

    #[test]
    fn first_visit_is_sticky() {
        let mut store = DiscoveryStore::new();
        store.record_visit_event(100);
        store.record_visit_event(200);
        assert_eq!(store.first_visit_ms, Some(100));
    }

    #[test]
    fn progress_rounds_to_percent() {
        let mut store = DiscoveryStore::new();
        store.discover("a");
        store.discover("b");
        assert_eq!(store.progress_percent(3), 67);
        assert_eq!(store.progress_percent(0), 0);
    }

    #[test]
    fn partial_document_loads_with_defaults() {
        let store: DiscoveryStore =
            serde_json::from_str(r#"{ "total_clicks": 7, "discovered": ["a"] }"#).unwrap();
        assert_eq!(store.total_clicks, 7);
        assert_eq!(store.discovered_count(), 1);
        assert_eq!(store.secrets_found, 0);
        assert!(store.start_time_ms.is_none());
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut store = DiscoveryStore::new();
        store.discover("a");
        store.record_secret();
        store.start_session(1);
        store.reset();
        assert_eq!(store.discovered_count(), 0);
        assert_eq!(store.secrets_found, 0);
        assert!(store.start_time_ms.is_none());
    }
}
