// camera/controller.rs
//
// The camera director: a two-state machine (Flying, Following/Idle) that
// drives fly-to transitions between poses and hands off to a soft follow
// once it arrives at a moving body.
//
// The director never reads positions computed on a prior frame — callers
// run the position pass first, then tick the director with the same elapsed
// time, so a chased body is always seen where it currently is.

use glam::Vec3;

use crate::bodies::SystemRegistry;
use crate::camera::easing::{ease_vec3, Easing};
use crate::camera::target::{resolve_target, TrackingTarget};
use crate::content::ContentCatalog;

/// Vertical share of the view distance when framing a body: the camera sits
/// above-and-behind at (0, d × 0.4, d) relative to the target.
const VIEW_OFFSET_UP: f32 = 0.4;

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Tuning constants for flight and follow behavior.
#[derive(Debug, Clone)]
pub struct CameraTuning {
    /// Fly-to duration in seconds.
    pub transition_duration: f32,
    /// First-order low-pass factor applied per frame while following a
    /// moving body (not a fixed-duration tween).
    pub follow_smoothing: f32,
    /// Where the camera returns to when nothing is focused.
    pub overview: CameraPose,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            transition_duration: 1.2,
            follow_smoothing: 0.12,
            overview: CameraPose::new(Vec3::new(0.0, 40.0, 90.0), Vec3::ZERO),
        }
    }
}

/// An in-flight interpolation between two poses.
/// `active` holds only while progress < 1.
#[derive(Debug, Clone)]
struct Transition {
    start: CameraPose,
    end: CameraPose,
    progress: f32,
    active: bool,
}

/// Drives the camera pose from the focused node id.
pub struct CameraDirector {
    tuning: CameraTuning,
    pose: CameraPose,
    transition: Transition,
    /// The resolved body being flown to / followed. None when heading back
    /// to the overview.
    tracked: Option<TrackingTarget>,
    /// Focus id observed last tick; a change triggers a new flight.
    previous_focus: Option<String>,
}

impl CameraDirector {
    pub fn new(tuning: CameraTuning) -> Self {
        let pose = tuning.overview;
        Self {
            tuning,
            pose,
            transition: Transition {
                start: pose,
                end: pose,
                progress: 1.0,
                active: false,
            },
            tracked: None,
            previous_focus: None,
        }
    }

    /// Current camera pose, updated every tick.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Whether a fly-to transition is in progress. Manual orbit/pan/zoom is
    /// disabled exactly while this is true.
    pub fn is_flying(&self) -> bool {
        self.transition.active
    }

    pub fn manual_control_enabled(&self) -> bool {
        !self.transition.active
    }

    /// The body currently flown to or followed.
    pub fn tracked(&self) -> Option<&TrackingTarget> {
        self.tracked.as_ref()
    }

    /// Adopt a pose set by manual camera controls (only honored while idle —
    /// the user has no authority mid-flight).
    pub fn sync_manual_pose(&mut self, position: Vec3, target: Vec3) {
        if !self.transition.active {
            self.pose = CameraPose::new(position, target);
        }
    }

    /// Snap home and forget any focus/flight.
    pub fn reset(&mut self) {
        self.pose = self.tuning.overview;
        self.transition = Transition {
            start: self.pose,
            end: self.pose,
            progress: 1.0,
            active: false,
        };
        self.tracked = None;
        self.previous_focus = None;
    }

    /// Advance one frame.
    ///
    /// A changed `focused` id starts a new flight from the *current* pose —
    /// interrupting an in-flight transition adopts the interpolated pose as
    /// the new start, so the camera never jumps. While flying toward a
    /// moving body the destination itself is re-derived every tick.
    pub fn tick(
        &mut self,
        focused: Option<&str>,
        registry: &SystemRegistry,
        catalog: &ContentCatalog,
        preferred_parent: Option<&str>,
        elapsed: f32,
        dt: f32,
    ) {
        if focused != self.previous_focus.as_deref() {
            self.previous_focus = focused.map(String::from);
            self.begin_flight(focused, registry, catalog, preferred_parent, elapsed);
        }

        if self.transition.active {
            self.advance_flight(elapsed, dt);
        } else if let Some(target) = &self.tracked {
            if target.needs_tracking() {
                self.follow(target.position(elapsed));
            }
            // Static targets: no per-frame motion, manual control has
            // full authority.
        }
    }

    fn begin_flight(
        &mut self,
        focused: Option<&str>,
        registry: &SystemRegistry,
        catalog: &ContentCatalog,
        preferred_parent: Option<&str>,
        elapsed: f32,
    ) {
        let start = self.pose;
        let end = match focused {
            Some(id) => {
                let target = resolve_target(id, registry, catalog, preferred_parent);
                let end = Self::framing_pose(&target, elapsed);
                self.tracked = Some(target);
                end
            }
            None => {
                self.tracked = None;
                self.tuning.overview
            }
        };
        self.transition = Transition {
            start,
            end,
            progress: 0.0,
            active: true,
        };
    }

    /// Where the camera should end up to frame the target right now.
    fn framing_pose(target: &TrackingTarget, elapsed: f32) -> CameraPose {
        let pos = target.position(elapsed);
        let dist = target.view_distance();
        CameraPose::new(
            pos + Vec3::new(0.0, dist * VIEW_OFFSET_UP, dist),
            pos,
        )
    }

    fn advance_flight(&mut self, elapsed: f32, dt: f32) {
        self.transition.progress += dt / self.tuning.transition_duration;
        if self.transition.progress >= 1.0 {
            self.transition.progress = 1.0;
            self.transition.active = false;
        }

        // Chase the live destination while still in flight.
        if self.transition.active {
            if let Some(target) = &self.tracked {
                if target.needs_tracking() {
                    self.transition.end = Self::framing_pose(target, elapsed);
                }
            }
        }

        let eased = Easing::CubicInOut.apply(self.transition.progress);
        self.pose.position = ease_vec3(
            self.transition.start.position,
            self.transition.end.position,
            eased,
            Easing::Linear,
        );
        self.pose.target = ease_vec3(
            self.transition.start.target,
            self.transition.end.target,
            eased,
            Easing::Linear,
        );
    }

    /// Soft-follow an orbiting body: the look-at point low-passes toward the
    /// body and the camera translates by the same motion, preserving the
    /// above-and-behind framing established at arrival.
    fn follow(&mut self, target_pos: Vec3) {
        let s = self.tuning.follow_smoothing;
        let look_at = self.pose.target.lerp(target_pos, s);
        self.pose.target = look_at;

        let offset = self.pose.position - look_at;
        let desired = target_pos + offset;
        self.pose.position = self.pose.position.lerp(desired, s);
    }
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new(CameraTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::default_registry;
    use crate::content::default_catalog;
    use crate::core::orbit::circular_position;

    fn setup() -> (CameraDirector, SystemRegistry, ContentCatalog) {
        (
            CameraDirector::default(),
            default_registry(),
            default_catalog(),
        )
    }

    /// Run whole-flight ticks at a fixed frame rate.
    fn run_frames(
        director: &mut CameraDirector,
        focused: Option<&str>,
        registry: &SystemRegistry,
        catalog: &ContentCatalog,
        elapsed: f32,
        frames: usize,
    ) {
        for _ in 0..frames {
            director.tick(focused, registry, catalog, None, elapsed, 1.0 / 60.0);
        }
    }

    #[test]
    fn starts_idle_at_overview() {
        let (director, _, _) = setup();
        assert!(!director.is_flying());
        assert_eq!(director.pose().position, Vec3::new(0.0, 40.0, 90.0));
    }

    #[test]
    fn focus_change_starts_flight_and_disables_manual_control() {
        let (mut director, reg, cat) = setup();
        director.tick(Some("experience-neshan"), &reg, &cat, None, 0.0, 1.0 / 60.0);
        assert!(director.is_flying());
        assert!(!director.manual_control_enabled());
    }

    #[test]
    fn flight_arrives_at_framing_pose() {
        let (mut director, reg, cat) = setup();
        // Frozen elapsed time keeps the destination fixed so the arrival
        // pose is exactly predictable.
        let elapsed = 10.0;
        run_frames(&mut director, Some("experience-navashgaran"), &reg, &cat, elapsed, 120);
        assert!(!director.is_flying());

        let p = reg.planet("experience-navashgaran").unwrap();
        let body = circular_position(48.0, 2.0 + 10.0 * 0.01, p.tilt);
        let dist = 10.0 + 2.2 * 4.0;
        let expected = body + Vec3::new(0.0, dist * 0.4, dist);

        // Follow mode nudges slightly after arrival; stay within a frame's
        // worth of drift.
        assert!((director.pose().position - expected).length() < 0.5);
        assert!((director.pose().target - body).length() < 0.5);
    }

    #[test]
    fn null_focus_flies_back_to_overview_exactly() {
        let (mut director, reg, cat) = setup();
        run_frames(&mut director, Some("experience-education"), &reg, &cat, 5.0, 120);
        run_frames(&mut director, None, &reg, &cat, 5.0, 120);
        assert!(!director.is_flying());
        assert!((director.pose().position - Vec3::new(0.0, 40.0, 90.0)).length() < 1e-3);
        assert!(director.pose().target.length() < 1e-3);
    }

    #[test]
    fn midflight_retarget_does_not_jump() {
        let (mut director, reg, cat) = setup();
        director.tick(Some("experience-neshan"), &reg, &cat, None, 3.0, 1.0 / 60.0);
        // Partway through the flight...
        run_frames(&mut director, Some("experience-neshan"), &reg, &cat, 3.0, 20);
        assert!(director.is_flying());
        let before = director.pose();

        // ...the user clicks something else. A zero-dt tick performs the
        // retarget without advancing: the pose must be byte-stable.
        director.tick(Some("secret-doubt"), &reg, &cat, None, 3.0, 0.0);
        let after = director.pose();
        assert!((after.position - before.position).length() < 1e-6);
        assert!((after.target - before.target).length() < 1e-6);
        assert!(director.is_flying());
    }

    #[test]
    fn moving_destination_is_rederived_during_flight() {
        let (mut director, reg, cat) = setup();
        // Advance elapsed while flying; the end pose chases the planet.
        let mut elapsed = 0.0;
        director.tick(Some("experience-education"), &reg, &cat, None, elapsed, 1.0 / 60.0);
        for _ in 0..200 {
            elapsed += 1.0 / 60.0;
            director.tick(Some("experience-education"), &reg, &cat, None, elapsed, 1.0 / 60.0);
        }
        assert!(!director.is_flying());
        let p = reg.planet("experience-education").unwrap();
        let body = circular_position(p.orbit_radius, p.start_angle + elapsed * p.orbit_speed, p.tilt);
        // The look-at should be near the *current* body position, not where
        // the planet was when the flight started.
        assert!((director.pose().target - body).length() < 1.0);
    }

    #[test]
    fn follow_preserves_arrival_offset() {
        let (mut director, reg, cat) = setup();
        let elapsed = 7.0;
        run_frames(&mut director, Some("experience-freelance"), &reg, &cat, elapsed, 120);
        assert!(!director.is_flying());
        let offset_at_arrival = director.pose().position - director.pose().target;

        run_frames(&mut director, Some("experience-freelance"), &reg, &cat, elapsed, 200);
        let offset_later = director.pose().position - director.pose().target;
        assert!(
            (offset_later - offset_at_arrival).length() < 0.1,
            "framing drifted: {offset_at_arrival:?} → {offset_later:?}"
        );
    }

    #[test]
    fn static_target_leaves_manual_control_alone() {
        let (mut director, reg, cat) = setup();
        run_frames(&mut director, Some("philosophy-backend"), &reg, &cat, 1.0, 120);
        assert!(!director.is_flying());
        let arrived = director.pose();

        // No per-frame motion on a nebula...
        run_frames(&mut director, Some("philosophy-backend"), &reg, &cat, 1.0, 10);
        assert_eq!(director.pose(), arrived);

        // ...and a manually orbited pose sticks.
        director.sync_manual_pose(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(director.pose().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn manual_pose_is_rejected_while_flying() {
        let (mut director, reg, cat) = setup();
        director.tick(Some("experience-neshan"), &reg, &cat, None, 0.0, 1.0 / 60.0);
        let before = director.pose();
        director.sync_manual_pose(Vec3::splat(99.0), Vec3::ZERO);
        assert_eq!(director.pose(), before);
    }

    #[test]
    fn end_to_end_click_frames_the_published_planet() {
        // The full §framing contract for the outermost planet at t = 10.
        let (mut director, reg, cat) = setup();
        let target = resolve_target("experience-navashgaran", &reg, &cat, None);
        assert!(matches!(target, TrackingTarget::Planet(_)));

        let expected_body = circular_position(48.0, 2.0 + 10.0 * 0.01, 0.1);
        assert!((target.position(10.0) - expected_body).length() < 1e-5);

        director.tick(Some("experience-navashgaran"), &reg, &cat, None, 10.0, 0.0);
        let dist = target.view_distance();
        let expected_end = expected_body + Vec3::new(0.0, dist * 0.4, dist);
        assert!((director.transition.end.position - expected_end).length() < 1e-4);
        assert!((director.transition.end.target - expected_body).length() < 1e-4);
    }
}
