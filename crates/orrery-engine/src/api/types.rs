use serde::Serialize;

/// Events the engine reports outward each frame, drained by the host and
/// forwarded to the UI layer (popups, overlays, sounds). Serialized as
/// `{ "type": ..., ... }` for the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The focused node changed (None = back to overview).
    FocusChanged { id: Option<String> },
    /// An achievement rule fired for the first time.
    AchievementUnlocked { id: String },
    GlitchStarted,
    GlitchEnded,
    MatrixRainToggled { on: bool },
    ThemeChanged { name: String },
    /// The fixed key sequence was completed.
    EasterEggTriggered,
}
