// bodies/catalog.rs
//
// The built-in portfolio dataset — one planet per company, moons for the
// skills used there, stations for projects, nebulae for philosophy notes,
// comets for the hidden ones.
//
// To add a company: append a PlanetConfig here and a matching experience
// node in content/catalog.rs with the same id.

use super::config::{
    BeltConfig, CometConfig, MoonConfig, NebulaConfig, PlanetConfig, RoleConfig, StationConfig,
    SunConfig,
};
use super::registry::SystemRegistry;

fn role(title: &str, duration: &str) -> RoleConfig {
    RoleConfig {
        title: title.to_string(),
        duration: duration.to_string(),
    }
}

fn moon(
    node_id: &str,
    label: &str,
    orbit_radius: f32,
    size: f32,
    color: &str,
    orbit_speed: f32,
    start_angle: f32,
) -> MoonConfig {
    MoonConfig {
        node_id: node_id.to_string(),
        label: label.to_string(),
        orbit_radius,
        size,
        color: color.to_string(),
        orbit_speed,
        start_angle,
    }
}

/// The default solar system.
pub fn default_registry() -> SystemRegistry {
    SystemRegistry {
        sun: SunConfig {
            size: 3.5,
            color: "#FDB813".to_string(),
            corona_color: "#FF8C00".to_string(),
            light_intensity: 2.5,
            pulse_speed: 0.8,
            pulse_amplitude: 0.1,
        },
        planets: vec![
            // Education — innermost orbit
            PlanetConfig {
                id: "experience-education".to_string(),
                name: "University".to_string(),
                description: "Computer Engineering".to_string(),
                roles: vec![
                    role("CE Student — Khayyam Univ.", "2021 - 2024"),
                    role("CE Student — Azad Univ.", "2025 - Present"),
                ],
                orbit_radius: 12.0,
                size: 1.1,
                color: "#D2691E".to_string(),
                orbit_speed: 0.04,
                rotation_speed: 0.3,
                tilt: 0.1,
                has_ring: false,
                ring_color: None,
                start_angle: 0.0,
                moons: vec![
                    moon("skill-linux", "Linux", 2.5, 0.3, "#FCC624", 0.25, 0.0),
                    moon("skill-git", "Git", 3.2, 0.25, "#F05032", 0.2, 2.1),
                ],
            },
            PlanetConfig {
                id: "experience-freelance".to_string(),
                name: "Freelance".to_string(),
                description: "PHP Developer".to_string(),
                roles: vec![role("PHP Developer (Freelancer)", "Feb 2019 - Jan 2022")],
                orbit_radius: 20.0,
                size: 1.5,
                color: "#5BA3EC".to_string(),
                orbit_speed: 0.025,
                rotation_speed: 0.2,
                tilt: 0.05,
                has_ring: false,
                ring_color: None,
                start_angle: 1.2,
                moons: vec![
                    moon("skill-php", "PHP/Laravel", 2.8, 0.35, "#8B93FF", 0.3, 0.5),
                    moon("skill-mysql", "MySQL", 3.5, 0.3, "#4DB8D0", 0.22, 1.8),
                    moon("skill-linux", "Linux", 4.2, 0.28, "#FCC624", 0.18, 3.2),
                    moon("skill-git", "Git", 4.8, 0.25, "#F05032", 0.15, 5.0),
                ],
            },
            PlanetConfig {
                id: "experience-launchingmax".to_string(),
                name: "LaunchingMax".to_string(),
                description: "Frontend Focus".to_string(),
                roles: vec![role("Software Developer", "Dec 2021 - Feb 2022")],
                orbit_radius: 27.0,
                size: 1.1,
                color: "#3DEB88".to_string(),
                orbit_speed: 0.02,
                rotation_speed: 0.35,
                tilt: 0.12,
                has_ring: false,
                ring_color: None,
                start_angle: 3.5,
                moons: vec![
                    moon("skill-javascript", "JavaScript", 2.2, 0.3, "#F7DF1E", 0.3, 1.0),
                    moon("skill-api-design", "REST API", 3.0, 0.25, "#00E5FF", 0.22, 3.5),
                ],
            },
            PlanetConfig {
                id: "experience-neshan".to_string(),
                name: "Neshan Maps".to_string(),
                description: "Backend Intern".to_string(),
                roles: vec![role("Backend Developer (Intern)", "Jul 2022 - Oct 2022")],
                orbit_radius: 34.0,
                size: 1.6,
                color: "#FF9933".to_string(),
                orbit_speed: 0.015,
                rotation_speed: 0.18,
                tilt: 0.08,
                has_ring: false,
                ring_color: None,
                start_angle: 5.0,
                moons: vec![
                    moon("skill-redis", "Redis", 2.8, 0.32, "#FF4438", 0.28, 0.0),
                    moon("skill-api-design", "REST API", 3.5, 0.3, "#00E5FF", 0.22, 1.5),
                    moon("skill-git", "Git", 4.2, 0.25, "#F05032", 0.18, 3.0),
                    moon("skill-docker", "Docker", 4.8, 0.28, "#2496ED", 0.15, 4.5),
                ],
            },
            // Current position — outermost orbit, ringed
            PlanetConfig {
                id: "experience-navashgaran".to_string(),
                name: "Navashgaran".to_string(),
                description: "Enterprise Java".to_string(),
                roles: vec![role("Java Software Developer", "Feb 2023 - Present")],
                orbit_radius: 48.0,
                size: 2.2,
                color: "#B370CF".to_string(),
                orbit_speed: 0.01,
                rotation_speed: 0.15,
                tilt: 0.1,
                has_ring: true,
                ring_color: Some("#B370CF40".to_string()),
                start_angle: 2.0,
                moons: vec![
                    moon("skill-java", "Java", 3.2, 0.4, "#FF6B35", 0.3, 0.0),
                    moon("skill-spring-boot", "Spring Boot", 4.0, 0.35, "#6DB33F", 0.25, 1.0),
                    moon("skill-hibernate", "Hibernate", 4.7, 0.3, "#BCAAA4", 0.2, 2.2),
                    moon("skill-mysql", "MySQL", 5.3, 0.3, "#4DB8D0", 0.16, 3.5),
                    moon("skill-rabbitmq", "RabbitMQ", 5.9, 0.28, "#FF6600", 0.13, 4.8),
                    moon("skill-docker", "Docker", 6.5, 0.28, "#2496ED", 0.11, 5.8),
                ],
            },
        ],
        stations: vec![
            station("project-apantos", "Apantos Framework", 38.0, 0.9, "#00ff41", 0.5, 0.4),
            station("project-enterprise-api", "Enterprise APIs", 40.0, 0.85, "#39FF14", 1.5, -0.2),
            station("project-data-migration", "Data Migration", 37.5, 0.8, "#76FF7A", 2.5, 0.5),
            station("project-neshan-backend", "Neshan Backend", 41.0, 0.8, "#00E676", 3.5, -0.4),
            station("project-freelance-web", "Freelance Projects", 39.0, 0.75, "#69F0AE", 4.2, 0.15),
            station("project-launchingmax-app", "LaunchingMax App", 42.0, 0.7, "#B2FF59", 5.0, -0.3),
            station("project-portfolio", "This Website", 40.5, 1.0, "#00FF87", 5.8, 0.0),
        ],
        comets: vec![
            comet("secret-doubt", "The Doubt", 0.03, 65.0, 0.8, 0.6, 0.0),
            comet("secret-failure", "The Failures", 0.025, 70.0, 1.2, 0.7, 2.0),
            comet("secret-imposter", "Imposter", 0.02, 60.0, 0.5, 0.5, 4.0),
            comet("secret-motivation", "Motivation", 0.028, 75.0, 1.0, 0.65, 5.5),
        ],
        nebulae: vec![
            nebula("philosophy-backend", "Why Backend?", [80.0, 40.0, -90.0], "#ff44ff", 8.0, 0.12),
            nebula("philosophy-clean-code", "Clean Code", [-90.0, -30.0, -85.0], "#ff66ff", 7.0, 0.11),
            nebula("philosophy-distributed", "Distributed Beauty", [100.0, -45.0, -75.0], "#dd44ff", 9.0, 0.11),
            nebula("philosophy-ai-future", "AI & The Future", [-70.0, 55.0, -95.0], "#ff44cc", 7.0, 0.12),
            nebula("philosophy-life-lessons", "Code & Life", [10.0, -65.0, -100.0], "#ff88ff", 8.0, 0.10),
            nebula("philosophy-simplicity", "Simplicity", [-100.0, 20.0, -70.0], "#ee44ff", 7.0, 0.11),
        ],
        belt: BeltConfig {
            inner_radius: 37.0,
            outer_radius: 43.0,
            count: 120,
            y_spread: 1.5,
        },
    }
}

fn station(
    node_id: &str,
    label: &str,
    orbit_radius: f32,
    size: f32,
    color: &str,
    angle: f32,
    height: f32,
) -> StationConfig {
    StationConfig {
        node_id: node_id.to_string(),
        label: label.to_string(),
        orbit_radius,
        size,
        color: color.to_string(),
        angle,
        height,
    }
}

fn comet(
    node_id: &str,
    label: &str,
    speed: f32,
    orbit_radius: f32,
    tilt: f32,
    eccentricity: f32,
    start_angle: f32,
) -> CometConfig {
    CometConfig {
        node_id: node_id.to_string(),
        label: label.to_string(),
        color: "#ff0055".to_string(),
        speed,
        orbit_radius,
        tilt,
        eccentricity,
        start_angle,
    }
}

fn nebula(
    node_id: &str,
    label: &str,
    position: [f32; 3],
    color: &str,
    size: f32,
    opacity: f32,
) -> NebulaConfig {
    NebulaConfig {
        node_id: node_id.to_string(),
        label: label.to_string(),
        position,
        color: color.to_string(),
        size,
        opacity,
    }
}
