// content/nodes.rs
//
// The static content collections the core consumes: graph nodes (what each
// body is about) and connections between them. Loaded once from JSON, never
// mutated by the core — discovery/lock state lives in the stores, which only
// read and filter these.

use serde::{Deserialize, Serialize};

/// What a node represents in the portfolio graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Skill,
    Project,
    Philosophy,
    Experience,
    Memory,
    Secret,
    Core,
}

impl NodeKind {
    /// Default display color when the node doesn't carry its own.
    pub fn default_color(self) -> &'static str {
        match self {
            NodeKind::Skill => "#00ffff",
            NodeKind::Project => "#00ff00",
            NodeKind::Philosophy => "#ff00ff",
            NodeKind::Experience => "#ffff00",
            NodeKind::Memory => "#ff69b4",
            NodeKind::Secret => "#ff0055",
            NodeKind::Core => "#ffffff",
        }
    }
}

/// An external link shown on a node's detail card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLink {
    pub label: String,
    pub url: String,
}

/// One node of the portfolio graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Markdown body rendered by the detail panel (external).
    #[serde(default)]
    pub content: String,
    /// Static world position for nodes not backed by an orbiting body.
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub locked: bool,
    /// `"category:threshold"`; see [`UnlockCondition`].
    #[serde(default)]
    pub unlock_condition: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub links: Vec<NodeLink>,
}

fn default_size() -> f32 {
    1.0
}

/// A directed (optionally bidirectional) edge between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Visual weight in [0, 1].
    pub strength: f32,
    #[serde(default)]
    pub bidirectional: bool,
}

/// A parsed gate of the form `"category:threshold"`, e.g. `"secrets:3"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockCondition {
    pub category: String,
    pub threshold: u32,
}

impl UnlockCondition {
    /// Parse `"category:threshold"`. Malformed strings yield `None` — a
    /// node with an unparseable gate simply stays locked.
    pub fn parse(raw: &str) -> Option<Self> {
        let (category, threshold) = raw.split_once(':')?;
        let threshold = threshold.trim().parse().ok()?;
        if category.is_empty() {
            return None;
        }
        Some(Self {
            category: category.to_string(),
            threshold,
        })
    }
}

/// The full static content set: nodes plus connections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl ContentCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_catalog() {
        let json = r#"{
            "nodes": [
                { "id": "skill-rust", "kind": "skill", "label": "Rust" },
                { "id": "secret-x", "kind": "secret", "label": "X",
                  "locked": true, "unlock_condition": "secrets:3" }
            ],
            "connections": [
                { "id": "c1", "from": "skill-rust", "to": "secret-x",
                  "strength": 0.5, "bidirectional": true }
            ]
        }"#;
        let catalog = ContentCatalog::from_json(json).unwrap();
        assert_eq!(catalog.nodes.len(), 2);
        assert_eq!(catalog.nodes[0].size, 1.0);
        assert!(!catalog.nodes[0].locked);
        assert!(catalog.nodes[1].locked);
        assert_eq!(catalog.connections[0].from, "skill-rust");
    }

    #[test]
    fn unlock_condition_parses() {
        let cond = UnlockCondition::parse("secrets:3").unwrap();
        assert_eq!(cond.category, "secrets");
        assert_eq!(cond.threshold, 3);
    }

    #[test]
    fn malformed_conditions_are_none() {
        assert!(UnlockCondition::parse("secrets").is_none());
        assert!(UnlockCondition::parse(":3").is_none());
        assert!(UnlockCondition::parse("nodes:lots").is_none());
    }

    #[test]
    fn kind_round_trips_lowercase() {
        let json = serde_json::to_string(&NodeKind::Philosophy).unwrap();
        assert_eq!(json, "\"philosophy\"");
        let back: NodeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeKind::Philosophy);
    }
}
