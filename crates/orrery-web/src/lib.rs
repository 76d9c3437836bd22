pub mod session;

pub use session::{LocalStorage, WebSession};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static SESSION: RefCell<Option<WebSession>> = RefCell::new(None);
}

fn with_session<R>(f: impl FnOnce(&mut WebSession) -> R) -> R {
    SESSION.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let session = borrow
            .as_mut()
            .expect("Session not initialized. Call session_init() first.");
        f(session)
    })
}

/// Construct the session and restore persisted progress.
#[wasm_bindgen]
pub fn session_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut session = WebSession::new();
    session.load_persisted();

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(session);
    });
    log::info!("orrery: initialized");
}

/// Advance one frame. `now_ms` is Date.now().
#[wasm_bindgen]
pub fn session_tick(dt: f32, now_ms: f64) {
    with_session(|s| s.tick(dt, now_ms));
}

/// Persist progress (call on pagehide and after meaningful events).
#[wasm_bindgen]
pub fn session_save() {
    with_session(|s| s.save_persisted());
}

/// Wipe all progress and persist the empty profile.
#[wasm_bindgen]
pub fn session_reset() {
    with_session(|s| s.reset());
}

// ---- Input ----

/// A node was clicked. `parent` is the planet a moon was rendered under,
/// or "" when not applicable.
#[wasm_bindgen]
pub fn session_node_clicked(id: &str, parent: &str) {
    with_session(|s| s.node_clicked(id, parent));
}

/// Pointer entered a node ("" clears the hover).
#[wasm_bindgen]
pub fn session_node_hovered(id: &str) {
    with_session(|s| s.node_hovered(id));
}

#[wasm_bindgen]
pub fn session_sun_clicked() {
    with_session(|s| s.sun_clicked());
}

#[wasm_bindgen]
pub fn session_connection_followed(from: &str, to: &str) {
    with_session(|s| s.connection_followed(from, to));
}

/// A global keydown: `code` is KeyboardEvent.code, `modifier` is
/// ctrlKey || metaKey, `from_text_input` suppresses most bindings.
#[wasm_bindgen]
pub fn session_key_down(code: &str, modifier: bool, from_text_input: bool) {
    with_session(|s| s.key_down(code, modifier, from_text_input));
}

/// Manual orbit-controls pose (ignored while a flight is active).
#[wasm_bindgen]
pub fn session_manual_pose(px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32) {
    with_session(|s| s.manual_pose(px, py, pz, tx, ty, tz));
}

// ---- Console boundary ----

#[wasm_bindgen]
pub fn console_focus(id: &str) -> bool {
    with_session(|s| s.console_focus(id))
}

#[wasm_bindgen]
pub fn console_discover(id: &str) {
    with_session(|s| s.console_discover(id));
}

#[wasm_bindgen]
pub fn console_unlock_achievement(id: &str) -> bool {
    with_session(|s| s.console_unlock_achievement(id))
}

#[wasm_bindgen]
pub fn console_command_used() {
    with_session(|s| s.console_command_used());
}

#[wasm_bindgen]
pub fn console_set_theme(name: &str) {
    with_session(|s| s.set_theme(name));
}

#[wasm_bindgen]
pub fn console_toggle_matrix_rain() {
    with_session(|s| s.toggle_matrix_rain());
}

#[wasm_bindgen]
pub fn console_trigger_glitch() {
    with_session(|s| s.trigger_glitch());
}

// ---- Data accessors ----

/// Body key order, read once at renderer init.
#[wasm_bindgen]
pub fn get_body_keys_json() -> String {
    with_session(|s| s.body_keys_json())
}

/// Flat f32 buffer: body_count × [x, y, z, visible].
#[wasm_bindgen]
pub fn get_positions_ptr() -> *const f32 {
    with_session(|s| s.positions_ptr())
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_session(|s| s.body_count())
}

/// Camera pose block: [px, py, pz, flying, tx, ty, tz, pad].
#[wasm_bindgen]
pub fn get_pose_ptr() -> *const f32 {
    with_session(|s| s.pose_ptr())
}

#[wasm_bindgen]
pub fn get_transition_active() -> bool {
    with_session(|s| s.transition_active())
}

#[wasm_bindgen]
pub fn get_focused_id() -> String {
    with_session(|s| s.focused_id())
}

#[wasm_bindgen]
pub fn get_hovered_id() -> String {
    with_session(|s| s.hovered_id())
}

/// Engine events since the last call, as a JSON array.
#[wasm_bindgen]
pub fn drain_events_json() -> String {
    with_session(|s| s.drain_events_json())
}

#[wasm_bindgen]
pub fn get_visible_nodes_json() -> String {
    with_session(|s| s.visible_nodes_json())
}

#[wasm_bindgen]
pub fn get_discovered_ids_json() -> String {
    with_session(|s| s.discovered_ids_json())
}

#[wasm_bindgen]
pub fn get_achievements_json() -> String {
    with_session(|s| s.achievements_json())
}

#[wasm_bindgen]
pub fn get_progress_percent() -> u32 {
    with_session(|s| s.progress_percent())
}

#[wasm_bindgen]
pub fn get_session_duration_secs() -> f64 {
    with_session(|s| s.session_duration_secs())
}
