// core/orbit.rs
//
// Orbital mechanics — pure math, no engine dependencies.
//
// Every orbit here is a closed-form parametric curve of a single elapsed-time
// parameter; nothing is integrated and there is no gravity. Angles grow
// without bound (angle = start_angle + elapsed × speed) and are never wrapped
// modulo 2π — the trig functions are periodic anyway.

use glam::Vec3;

/// Highest eccentricity accepted by [`elliptical_position`]. Values at or
/// above 1.0 describe an open curve and are out of contract.
pub const MAX_ECCENTRICITY: f32 = 0.99;

/// Position on a circular orbit of the given radius.
///
/// The orbit lies in the XZ plane; `tilt` rotates the orbital plane about
/// the X axis. At tilt = 0 the orbit is flat.
#[inline]
pub fn circular_position(radius: f32, angle: f32, tilt: f32) -> Vec3 {
    let x = radius * angle.cos();
    let z_raw = radius * angle.sin();
    Vec3::new(x, z_raw * tilt.sin(), z_raw * tilt.cos())
}

/// World position of a moon given its parent's *current* world position.
///
/// The moon offset is a flat circle: moons do not inherit their parent's
/// orbital tilt and stay level regardless of it. That is the shipped
/// behavior, not a physics statement.
#[inline]
pub fn moon_position(parent_world: Vec3, orbit_radius: f32, angle: f32) -> Vec3 {
    Vec3::new(
        parent_world.x + orbit_radius * angle.cos(),
        parent_world.y,
        parent_world.z + orbit_radius * angle.sin(),
    )
}

/// Position on an elliptical orbit: r = a(1 − e²) / (1 + e·cos θ), then the
/// same tilt projection as [`circular_position`].
///
/// Contract: 0 ≤ e < 1. Out-of-range eccentricities are clamped to
/// [`MAX_ECCENTRICITY`] so a bad config can never push NaN into the frame
/// loop; debug builds assert.
#[inline]
pub fn elliptical_position(semi_major_axis: f32, eccentricity: f32, angle: f32, tilt: f32) -> Vec3 {
    debug_assert!(
        (0.0..1.0).contains(&eccentricity),
        "eccentricity out of contract: {eccentricity}"
    );
    let e = eccentricity.clamp(0.0, MAX_ECCENTRICITY);
    let r = semi_major_axis * (1.0 - e * e) / (1.0 + e * angle.cos());
    circular_position(r, angle, tilt)
}

/// The current angle of a body on its orbit.
#[inline]
pub fn orbit_angle(start_angle: f32, speed: f32, elapsed: f32) -> f32 {
    start_angle + elapsed * speed
}

/// Sample points along a circular orbit for path rendering.
///
/// Returns `segments + 1` points covering 0..=2π, so the first and last
/// points coincide and the loop is closed.
pub fn orbit_path_samples(radius: f32, segments: usize, tilt: f32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push(circular_position(radius, angle, tilt));
    }
    points
}
