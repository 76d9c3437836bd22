// input/bindings.rs
//
// Global keyboard shortcuts → engine actions. Shortcuts are suppressed
// while a text input has focus, with one exception: Escape still closes
// the console so the user is never trapped in it.

use super::queue::KeyInput;

/// A UI-level action produced by a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleConsole,
    /// Close the console if open, else clear the focused node.
    Escape,
    HistoryBack,
    HistoryForward,
    ToggleMiniMap,
    ToggleExplorationBoard,
    OpenHelp,
}

/// Map a key event to an action, or `None` when it isn't bound.
pub fn map_key(key: &KeyInput) -> Option<UiAction> {
    if key.from_text_input {
        // Only Escape survives text-input focus.
        return match key.code.as_str() {
            "Escape" => Some(UiAction::Escape),
            _ => None,
        };
    }

    match key.code.as_str() {
        "Backquote" => Some(UiAction::ToggleConsole),
        "Escape" => Some(UiAction::Escape),
        "ArrowLeft" if key.modifier => Some(UiAction::HistoryBack),
        "ArrowRight" if key.modifier => Some(UiAction::HistoryForward),
        "KeyM" if key.modifier => Some(UiAction::ToggleMiniMap),
        "KeyL" => Some(UiAction::ToggleExplorationBoard),
        "Slash" if key.modifier => Some(UiAction::OpenHelp),
        _ => None,
    }
}
