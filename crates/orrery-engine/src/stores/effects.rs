// stores/effects.rs
//
// Cosmetic overlay state: theme, matrix rain, the glitch flash, and the
// achievement-popup timer. Anything scheduled here is cancellable and is
// cancelled on reset — a stale timer must never fire into fresh state.

use crate::core::timers::{TimerId, TimerQueue};

/// What a fired effects timer means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTimer {
    GlitchEnd,
    PopupDismiss,
}

pub const DEFAULT_THEME: &str = "green";

pub struct EffectsState {
    pub theme: String,
    pub matrix_rain: bool,
    glitch_active: bool,
    glitch_timer: Option<TimerId>,
    popup_timer: Option<TimerId>,
    timers: TimerQueue<EffectTimer>,
}

impl EffectsState {
    pub fn new() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            matrix_rain: false,
            glitch_active: false,
            glitch_timer: None,
            popup_timer: None,
            timers: TimerQueue::new(),
        }
    }

    pub fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
    }

    pub fn toggle_matrix_rain(&mut self) {
        self.matrix_rain = !self.matrix_rain;
    }

    pub fn glitch_active(&self) -> bool {
        self.glitch_active
    }

    /// Start (or restart) the glitch flash; it auto-ends after `duration`
    /// seconds. Retriggering mid-glitch replaces the pending end.
    pub fn trigger_glitch(&mut self, duration: f32) {
        if let Some(id) = self.glitch_timer.take() {
            self.timers.cancel(id);
        }
        self.glitch_active = true;
        self.glitch_timer = Some(self.timers.schedule(duration, EffectTimer::GlitchEnd));
    }

    /// Arm the achievement-popup auto-dismiss. A new unlock replaces the
    /// pending dismissal so the popup shows its full duration.
    pub fn arm_popup_dismiss(&mut self, duration: f32) {
        if let Some(id) = self.popup_timer.take() {
            self.timers.cancel(id);
        }
        self.popup_timer = Some(self.timers.schedule(duration, EffectTimer::PopupDismiss));
    }

    /// Advance timers; returns what fired this frame.
    pub fn tick(&mut self, dt: f32) -> Vec<EffectTimer> {
        let fired = self.timers.tick(dt);
        for event in &fired {
            match event {
                EffectTimer::GlitchEnd => {
                    self.glitch_active = false;
                    self.glitch_timer = None;
                }
                EffectTimer::PopupDismiss => {
                    self.popup_timer = None;
                }
            }
        }
        fired
    }

    /// Cancel every pending timer and return to defaults.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.theme = DEFAULT_THEME.to_string();
        self.matrix_rain = false;
        self.glitch_active = false;
        self.glitch_timer = None;
        self.popup_timer = None;
    }
}

impl Default for EffectsState {
    fn default() -> Self {
        Self::new()
    }
}
