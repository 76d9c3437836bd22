// stores/navigation.rs
//
// In-memory back/forward history over visited node ids, plus the small UI
// flags that travel with navigation (minimap, exploration board, focus
// mode) and the tracked-parent hint used to disambiguate moons. Entirely
// separate from browser URL history; reset on full reload.

/// Coarse camera context, used by the HUD to pick its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Overview,
    Planet,
    Detail,
}

pub struct NavigationStore {
    history: Vec<String>,
    /// Index of the current entry; `None` while the history is empty.
    index: Option<usize>,
    pub show_minimap: bool,
    pub show_exploration_board: bool,
    pub focus_mode: FocusMode,
    /// The planet the user last clicked a moon under. Moon resolution
    /// consults this before falling back to registry order.
    tracked_parent: Option<String>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            index: None,
            show_minimap: false,
            show_exploration_board: false,
            focus_mode: FocusMode::Overview,
            tracked_parent: None,
        }
    }

    /// Append an entry, discarding anything forward of the current index —
    /// standard browser-history semantics.
    pub fn push(&mut self, node_id: &str) {
        let keep = match self.index {
            Some(i) => i + 1,
            None => 0,
        };
        self.history.truncate(keep);
        self.history.push(node_id.to_string());
        self.index = Some(self.history.len() - 1);
    }

    /// Step back. Returns the id now current, or `None` at the start.
    pub fn go_back(&mut self) -> Option<String> {
        let i = self.index?;
        if i == 0 {
            return None;
        }
        self.index = Some(i - 1);
        Some(self.history[i - 1].clone())
    }

    /// Step forward. Returns the id now current, or `None` at the tail.
    pub fn go_forward(&mut self) -> Option<String> {
        let i = self.index?;
        if i + 1 >= self.history.len() {
            return None;
        }
        self.index = Some(i + 1);
        Some(self.history[i + 1].clone())
    }

    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.history[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn toggle_minimap(&mut self) {
        self.show_minimap = !self.show_minimap;
    }

    pub fn toggle_exploration_board(&mut self) {
        self.show_exploration_board = !self.show_exploration_board;
    }

    pub fn tracked_parent(&self) -> Option<&str> {
        self.tracked_parent.as_deref()
    }

    pub fn set_tracked_parent(&mut self, id: Option<String>) {
        self.tracked_parent = id;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward_walk_the_stack() {
        let mut nav = NavigationStore::new();
        nav.push("a");
        nav.push("b");
        nav.push("c");
        assert_eq!(nav.go_back().as_deref(), Some("b"));
        assert_eq!(nav.go_back().as_deref(), Some("a"));
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.go_forward().as_deref(), Some("b"));
        assert_eq!(nav.go_forward().as_deref(), Some("c"));
        assert_eq!(nav.go_forward(), None);
    }

    #[test]
    fn push_after_back_discards_forward_branch() {
        let mut nav = NavigationStore::new();
        nav.push("a");
        nav.push("b");
        nav.push("c");
        nav.go_back();
        nav.go_back();
        nav.push("d");
        // The branch containing b and c is gone.
        assert_eq!(nav.go_forward(), None);
        assert_eq!(nav.current(), Some("d"));
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.go_back().as_deref(), Some("a"));
    }

    #[test]
    fn empty_history_is_inert() {
        let mut nav = NavigationStore::new();
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.go_forward(), None);
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn tracked_parent_hint_round_trips() {
        let mut nav = NavigationStore::new();
        nav.set_tracked_parent(Some("experience-neshan".to_string()));
        assert_eq!(nav.tracked_parent(), Some("experience-neshan"));
        nav.set_tracked_parent(None);
        assert_eq!(nav.tracked_parent(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut nav = NavigationStore::new();
        nav.push("a");
        nav.toggle_minimap();
        nav.set_tracked_parent(Some("p".to_string()));
        nav.reset();
        assert!(nav.is_empty());
        assert!(!nav.show_minimap);
        assert_eq!(nav.tracked_parent(), None);
    }
}
