// content/catalog.rs
//
// Built-in content set matching the default body registry: one node per
// body, the hidden/secret layer, and the achievement rule table.

use super::nodes::{Connection, ContentCatalog, GraphNode, NodeKind};
use crate::stores::achievements::Achievement;

fn node(id: &str, kind: NodeKind, label: &str, description: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        description: description.to_string(),
        content: String::new(),
        position: None,
        size: 1.0,
        color: None,
        locked: false,
        unlock_condition: None,
        tags: Vec::new(),
        year: None,
        links: Vec::new(),
    }
}

fn locked(mut n: GraphNode, condition: &str) -> GraphNode {
    n.locked = true;
    n.unlock_condition = Some(condition.to_string());
    n
}

/// The default portfolio content.
pub fn default_catalog() -> ContentCatalog {
    let mut nodes = vec![
        // Experience — one per planet
        node("experience-education", NodeKind::Experience, "University", "Computer Engineering"),
        node("experience-freelance", NodeKind::Experience, "Freelance", "PHP years"),
        node("experience-launchingmax", NodeKind::Experience, "LaunchingMax", "Frontend focus"),
        node("experience-neshan", NodeKind::Experience, "Neshan Maps", "Backend internship"),
        node("experience-navashgaran", NodeKind::Experience, "Navashgaran", "Enterprise Java"),
        // Skills — one per distinct moon id
        node("skill-linux", NodeKind::Skill, "Linux", "Daily driver since day one"),
        node("skill-git", NodeKind::Skill, "Git", "Version control everywhere"),
        node("skill-php", NodeKind::Skill, "PHP/Laravel", "The freelance stack"),
        node("skill-mysql", NodeKind::Skill, "MySQL", "Relational workhorse"),
        node("skill-javascript", NodeKind::Skill, "JavaScript", "Browser-side work"),
        node("skill-api-design", NodeKind::Skill, "REST API", "Interface design"),
        node("skill-redis", NodeKind::Skill, "Redis", "Caching and queues"),
        node("skill-docker", NodeKind::Skill, "Docker", "Containers in every job"),
        node("skill-java", NodeKind::Skill, "Java", "Current main language"),
        node("skill-spring-boot", NodeKind::Skill, "Spring Boot", "Service framework"),
        node("skill-hibernate", NodeKind::Skill, "Hibernate", "ORM layer"),
        node("skill-rabbitmq", NodeKind::Skill, "RabbitMQ", "Async messaging"),
        // Projects — one per station
        node("project-apantos", NodeKind::Project, "Apantos Framework", "In-house web framework"),
        node("project-enterprise-api", NodeKind::Project, "Enterprise APIs", "Service surface at work"),
        node("project-data-migration", NodeKind::Project, "Data Migration", "Legacy system rescue"),
        node("project-neshan-backend", NodeKind::Project, "Neshan Backend", "Map-tile plumbing"),
        node("project-freelance-web", NodeKind::Project, "Freelance Projects", "Client sites"),
        node("project-launchingmax-app", NodeKind::Project, "LaunchingMax App", "Startup frontend"),
        node("project-portfolio", NodeKind::Project, "This Website", "The thing you are flying through"),
        // Philosophy — one per nebula
        node("philosophy-backend", NodeKind::Philosophy, "Why Backend?", "On invisible work"),
        node("philosophy-clean-code", NodeKind::Philosophy, "Clean Code", "On reading over writing"),
        node("philosophy-distributed", NodeKind::Philosophy, "Distributed Beauty", "On systems at scale"),
        node("philosophy-ai-future", NodeKind::Philosophy, "AI & The Future", "On what changes"),
        node("philosophy-life-lessons", NodeKind::Philosophy, "Code & Life", "On the rest of it"),
        node("philosophy-simplicity", NodeKind::Philosophy, "Simplicity", "On saying no"),
    ];

    // The hidden layer — comets are locked until clicked, the memory and
    // core nodes gate on exploration counters.
    for (id, label) in [
        ("secret-doubt", "The Doubt"),
        ("secret-failure", "The Failures"),
        ("secret-imposter", "Imposter"),
        ("secret-motivation", "Motivation"),
    ] {
        let mut n = node(id, NodeKind::Secret, label, "Something swept past.");
        n.locked = true;
        nodes.push(n);
    }
    nodes.push(locked(
        node("memory-first-computer", NodeKind::Memory, "First Computer", "Where it started"),
        "secrets:3",
    ));
    let mut core = locked(
        node("core-self", NodeKind::Core, "The Center", "Everything orbits this"),
        "nodes:20",
    );
    core.position = Some([0.0, 0.0, 0.0]);
    nodes.push(core);

    let connections = vec![
        connection("conn-java-spring", "skill-java", "skill-spring-boot", 0.9, true),
        connection("conn-spring-hibernate", "skill-spring-boot", "skill-hibernate", 0.7, true),
        connection("conn-nava-java", "experience-navashgaran", "skill-java", 0.8, false),
        connection("conn-neshan-redis", "experience-neshan", "skill-redis", 0.6, false),
        connection("conn-portfolio-self", "project-portfolio", "core-self", 0.5, true),
        connection("conn-freelance-php", "experience-freelance", "skill-php", 0.8, false),
        connection("conn-backend-simplicity", "philosophy-backend", "philosophy-simplicity", 0.4, true),
    ];

    ContentCatalog { nodes, connections }
}

fn connection(id: &str, from: &str, to: &str, strength: f32, bidirectional: bool) -> Connection {
    Connection {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        label: None,
        strength,
        bidirectional,
    }
}

/// The achievement rule table. Order matters: when one counter update
/// satisfies several rules at once, the first listed wins that call.
pub fn default_achievements() -> Vec<Achievement> {
    let rule = |id: &str, name: &str, description: &str, icon: &str, condition: &str| Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        condition: condition.to_string(),
        unlocked: false,
        reward: None,
    };
    vec![
        rule("first-contact", "First Contact", "Discover your first node", "🛰", "nodes:1"),
        rule("explorer", "Explorer", "Discover 10 nodes", "🔭", "nodes:10"),
        rule("cartographer", "Cartographer", "Discover 25 nodes", "🗺", "nodes:25"),
        rule("world-hopper", "World Hopper", "Visit every planet", "🪐", "planets:5"),
        rule("shipwright", "Shipwright", "Visit every project station", "🛠", "projects:7"),
        rule("stargazer", "Stargazer", "Read every philosophy nebula", "🌌", "nebulae:6"),
        rule("philosopher", "Philosopher", "Read three philosophy notes", "📜", "philosophy:3"),
        rule("secret-seeker", "Secret Seeker", "Catch a comet", "☄", "secrets:1"),
        rule("shadow-walker", "Shadow Walker", "Catch all four comets", "🌑", "secrets:4"),
        rule("speed-runner", "Speed Runner", "Eight nodes inside one minute", "⚡", "speed:8"),
        rule("terminal-adept", "Terminal Adept", "Run five console commands", "⌨", "terminal:5"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registry_body_has_a_node() {
        let catalog = default_catalog();
        let registry = crate::bodies::default_registry();
        for planet in &registry.planets {
            assert!(catalog.node(&planet.id).is_some(), "missing {}", planet.id);
            for moon in &planet.moons {
                assert!(catalog.node(&moon.node_id).is_some(), "missing {}", moon.node_id);
            }
        }
        for station in &registry.stations {
            assert!(catalog.node(&station.node_id).is_some(), "missing {}", station.node_id);
        }
        for comet in &registry.comets {
            assert!(catalog.node(&comet.node_id).is_some(), "missing {}", comet.node_id);
        }
        for nebula in &registry.nebulae {
            assert!(catalog.node(&nebula.node_id).is_some(), "missing {}", nebula.node_id);
        }
    }

    #[test]
    fn secrets_start_locked() {
        let catalog = default_catalog();
        assert!(catalog.node("secret-doubt").unwrap().locked);
        assert!(catalog.node("core-self").unwrap().locked);
        assert!(!catalog.node("skill-java").unwrap().locked);
    }

    #[test]
    fn achievement_conditions_all_parse() {
        use crate::content::nodes::UnlockCondition;
        for rule in default_achievements() {
            assert!(
                UnlockCondition::parse(&rule.condition).is_some(),
                "bad condition on {}",
                rule.id
            );
        }
    }

    #[test]
    fn connection_endpoints_exist() {
        let catalog = default_catalog();
        for conn in &catalog.connections {
            assert!(catalog.node(&conn.from).is_some(), "{} from", conn.id);
            assert!(catalog.node(&conn.to).is_some(), "{} to", conn.id);
        }
    }
}
