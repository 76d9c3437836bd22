// stores/graph.rs
//
// Runtime state layered over the static node/connection collections:
// focus, hover, per-node discovered/locked flags, and the reactive
// visibility gate. Owns the only mutable view of node state — the content
// catalog itself is never touched.

use crate::content::nodes::{Connection, ContentCatalog, GraphNode, UnlockCondition};
use crate::stores::discovery::DiscoveryStore;

/// A node together with its runtime flags.
#[derive(Debug, Clone)]
pub struct NodeState {
    pub node: GraphNode,
    pub discovered: bool,
    pub locked: bool,
}

/// Focus, hover, and node runtime state.
pub struct GraphStore {
    nodes: Vec<NodeState>,
    connections: Vec<Connection>,
    focused: Option<String>,
    hovered: Option<String>,
}

impl GraphStore {
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self {
            nodes: catalog
                .nodes
                .iter()
                .map(|node| NodeState {
                    discovered: false,
                    locked: node.locked,
                    node: node.clone(),
                })
                .collect(),
            connections: catalog.connections.clone(),
            focused: None,
            hovered: None,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn set_focused(&mut self, id: Option<String>) {
        self.focused = id;
    }

    pub fn set_hovered(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    pub fn node(&self, id: &str) -> Option<&NodeState> {
        self.nodes.iter().find(|n| n.node.id == id)
    }

    pub fn nodes(&self) -> &[NodeState] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Set the discovered flag. Idempotent.
    pub fn discover(&mut self, id: &str) {
        if let Some(state) = self.nodes.iter_mut().find(|n| n.node.id == id) {
            state.discovered = true;
        }
    }

    /// Permanently unlock a node (one-way gate).
    pub fn unlock(&mut self, id: &str) {
        if let Some(state) = self.nodes.iter_mut().find(|n| n.node.id == id) {
            state.locked = false;
        }
    }

    /// Whether a node is visible right now, given current counters.
    ///
    /// A locked node shows up once its `unlock_condition` is satisfied —
    /// recomputed on every call, never cached, so flipping a counter flips
    /// visibility with no other state change.
    pub fn is_visible(&self, state: &NodeState, discovery: &DiscoveryStore) -> bool {
        if !state.locked {
            return true;
        }
        let Some(raw) = state.node.unlock_condition.as_deref() else {
            return false;
        };
        let Some(cond) = UnlockCondition::parse(raw) else {
            return false;
        };
        let value = match cond.category.as_str() {
            "nodes" => discovery.discovered_count() as u32,
            "terminal" => discovery.terminal_commands_used,
            "secrets" => discovery.secrets_found,
            _ => return false,
        };
        value >= cond.threshold
    }

    /// All currently visible nodes.
    pub fn visible_nodes(&self, discovery: &DiscoveryStore) -> Vec<&NodeState> {
        self.nodes
            .iter()
            .filter(|n| self.is_visible(n, discovery))
            .collect()
    }

    /// Connections whose endpoints are both visible.
    pub fn visible_connections(&self, discovery: &DiscoveryStore) -> Vec<&Connection> {
        let visible: Vec<&str> = self
            .visible_nodes(discovery)
            .iter()
            .map(|n| n.node.id.as_str())
            .collect();
        self.connections
            .iter()
            .filter(|c| visible.contains(&c.from.as_str()) && visible.contains(&c.to.as_str()))
            .collect()
    }

    /// Nodes reachable from `id` along its outgoing connections (incoming
    /// too when the edge is bidirectional).
    pub fn connected_nodes(&self, id: &str) -> Vec<&NodeState> {
        let mut ids: Vec<&str> = Vec::new();
        for c in &self.connections {
            if c.from == id {
                ids.push(&c.to);
            } else if c.bidirectional && c.to == id {
                ids.push(&c.from);
            }
        }
        self.nodes
            .iter()
            .filter(|n| ids.contains(&n.node.id.as_str()))
            .collect()
    }

    pub fn discovered_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.discovered).count()
    }

    /// Denominator for the progress figure: everything not currently locked.
    pub fn unlocked_total(&self) -> usize {
        self.nodes.iter().filter(|n| !n.locked).count()
    }

    /// Back to the initial flags from the catalog.
    pub fn reset(&mut self, catalog: &ContentCatalog) {
        for state in &mut self.nodes {
            state.discovered = false;
            state.locked = catalog
                .node(&state.node.id)
                .map(|n| n.locked)
                .unwrap_or(false);
        }
        self.focused = None;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_catalog;

    fn setup() -> (GraphStore, DiscoveryStore) {
        (GraphStore::new(&default_catalog()), DiscoveryStore::new())
    }

    #[test]
    fn gate_flips_with_the_counter_alone() {
        let (graph, mut discovery) = setup();
        let memory = graph.node("memory-first-computer").unwrap();

        discovery.record_secret();
        discovery.record_secret();
        assert!(!graph.is_visible(memory, &discovery), "secrets:3 at 2");

        discovery.record_secret();
        assert!(graph.is_visible(memory, &discovery), "secrets:3 at 3");
    }

    #[test]
    fn unlocked_nodes_are_always_visible() {
        let (graph, discovery) = setup();
        let skill = graph.node("skill-java").unwrap();
        assert!(graph.is_visible(skill, &discovery));
    }

    #[test]
    fn locked_without_condition_stays_hidden() {
        let (graph, discovery) = setup();
        let secret = graph.node("secret-doubt").unwrap();
        assert!(!graph.is_visible(secret, &discovery));
    }

    #[test]
    fn explicit_unlock_is_permanent() {
        let (mut graph, discovery) = setup();
        graph.unlock("secret-doubt");
        let secret = graph.node("secret-doubt").unwrap();
        assert!(!secret.locked);
        assert!(graph.is_visible(secret, &discovery));
    }

    #[test]
    fn visible_connections_require_both_endpoints() {
        let (mut graph, discovery) = setup();
        let before = graph.visible_connections(&discovery).len();
        // core-self is locked, so its connection is hidden...
        assert!(before < graph.connections().len());
        // ...until the endpoint unlocks.
        graph.unlock("core-self");
        assert_eq!(graph.visible_connections(&discovery).len(), before + 1);
    }

    #[test]
    fn connected_nodes_respect_direction() {
        let (graph, _) = setup();
        // conn-nava-java is one-way: experience-navashgaran → skill-java.
        let from_planet = graph.connected_nodes("experience-navashgaran");
        assert!(from_planet.iter().any(|n| n.node.id == "skill-java"));
        let from_skill = graph.connected_nodes("skill-java");
        assert!(!from_skill.iter().any(|n| n.node.id == "experience-navashgaran"));
        // Bidirectional edges come back the other way.
        assert!(from_skill.iter().any(|n| n.node.id == "skill-spring-boot"));
    }

    #[test]
    fn reset_restores_catalog_flags() {
        let catalog = default_catalog();
        let mut graph = GraphStore::new(&catalog);
        graph.discover("skill-java");
        graph.unlock("secret-doubt");
        graph.set_focused(Some("skill-java".to_string()));

        graph.reset(&catalog);
        assert_eq!(graph.discovered_count(), 0);
        assert!(graph.node("secret-doubt").unwrap().locked);
        assert!(graph.focused().is_none());
    }
}
