// input/queue.rs
//
// Input events the engine understands. JS writes events into the queue;
// the engine drains them at the start of each frame, so handlers run
// synchronously relative to the frame the event arrived in.

/// A keyboard event as seen by the global shortcut layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.code` value, e.g. "Backquote", "ArrowLeft", "KeyM".
    pub code: String,
    /// Ctrl or Meta held.
    pub modifier: bool,
    /// The event originated inside a text input — almost every shortcut is
    /// suppressed there.
    pub from_text_input: bool,
}

impl KeyInput {
    pub fn plain(code: &str) -> Self {
        Self {
            code: code.to_string(),
            modifier: false,
            from_text_input: false,
        }
    }

    pub fn with_modifier(code: &str) -> Self {
        Self {
            code: code.to_string(),
            modifier: true,
            from_text_input: false,
        }
    }
}

/// Everything the UI layer can feed into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A body or node was clicked. `parent` carries the planet a moon was
    /// rendered under — required to pick the right copy of a shared skill.
    NodeClicked {
        id: String,
        parent: Option<String>,
    },
    /// Pointer moved over (or off) a node.
    NodeHovered { id: Option<String> },
    /// The sun itself was clicked.
    SunClicked,
    /// A connection line was followed from a detail panel.
    ConnectionFollowed { from: String, to: String },
    Key(KeyInput),
}

/// Pending input events, drained once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
