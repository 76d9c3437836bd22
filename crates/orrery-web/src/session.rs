// session.rs
//
// The browser session: the engine aggregate plus the flat frame buffer the
// renderer reads, and the localStorage persistence backend.
//
// JS drives it frame by frame: push input, tick, then read the position
// buffer and camera pose through the pointer accessors.

use orrery_engine::{
    FrameBuffer, InputEvent, KeyInput, KeyValueStore, Orrery,
};

/// localStorage-backed key-value store. Every accessor degrades to a no-op
/// when storage is unavailable (private browsing, sandboxed iframe) — the
/// session then simply starts fresh each load.
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(s) = storage() {
            if s.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn delete(&mut self, key: &str) {
        if let Some(s) = storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// One running orrery plus its renderer-facing frame buffer.
pub struct WebSession {
    app: Orrery,
    frame: FrameBuffer,
}

impl WebSession {
    pub fn new() -> Self {
        let app = Orrery::with_defaults();
        let frame = FrameBuffer::new(&app.registry);
        Self { app, frame }
    }

    /// Restore persisted progress. Call once before the first tick.
    pub fn load_persisted(&mut self) {
        self.app.load_persisted(&LocalStorage);
    }

    /// Persist progress (fire-and-forget).
    pub fn save_persisted(&self) {
        self.app.save_persisted(&mut LocalStorage);
    }

    /// Run one frame and repack the frame buffer.
    pub fn tick(&mut self, dt: f32, now_ms: f64) {
        self.app.tick(dt, now_ms as u64);
        self.frame.rebuild(
            &self.app.positions,
            self.app.camera.pose(),
            self.app.camera.is_flying(),
        );
    }

    // ---- Input ----

    pub fn node_clicked(&mut self, id: &str, parent: &str) {
        self.app.push_input(InputEvent::NodeClicked {
            id: id.to_string(),
            parent: if parent.is_empty() {
                None
            } else {
                Some(parent.to_string())
            },
        });
    }

    pub fn node_hovered(&mut self, id: &str) {
        self.app.push_input(InputEvent::NodeHovered {
            id: if id.is_empty() {
                None
            } else {
                Some(id.to_string())
            },
        });
    }

    pub fn sun_clicked(&mut self) {
        self.app.push_input(InputEvent::SunClicked);
    }

    pub fn connection_followed(&mut self, from: &str, to: &str) {
        self.app.push_input(InputEvent::ConnectionFollowed {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    pub fn key_down(&mut self, code: &str, modifier: bool, from_text_input: bool) {
        self.app.push_input(InputEvent::Key(KeyInput {
            code: code.to_string(),
            modifier,
            from_text_input,
        }));
    }

    /// Manual orbit-controls pose, honored only while no flight is active.
    pub fn manual_pose(&mut self, px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32) {
        self.app
            .camera
            .sync_manual_pose(glam_vec(px, py, pz), glam_vec(tx, ty, tz));
    }

    // ---- Console boundary ----

    pub fn console_focus(&mut self, id: &str) -> bool {
        self.app.console_focus(id)
    }

    pub fn console_discover(&mut self, id: &str) {
        self.app.console_discover(id);
    }

    pub fn console_unlock_achievement(&mut self, id: &str) -> bool {
        self.app.console_unlock_achievement(id)
    }

    pub fn console_command_used(&mut self) {
        self.app.console_command_used();
    }

    pub fn set_theme(&mut self, name: &str) {
        self.app.set_theme(name);
    }

    pub fn toggle_matrix_rain(&mut self) {
        self.app.toggle_matrix_rain();
    }

    pub fn trigger_glitch(&mut self) {
        self.app.trigger_glitch();
    }

    // ---- Renderer reads ----

    pub fn body_keys_json(&self) -> String {
        self.frame.keys_json()
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.frame.positions_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.frame.body_count() as u32
    }

    pub fn pose_ptr(&self) -> *const f32 {
        self.frame.pose_ptr()
    }

    pub fn transition_active(&self) -> bool {
        self.app.camera.is_flying()
    }

    pub fn focused_id(&self) -> String {
        self.app.graph.focused().unwrap_or("").to_string()
    }

    pub fn hovered_id(&self) -> String {
        self.app.graph.hovered().unwrap_or("").to_string()
    }

    // ---- HUD / console reads ----

    /// Events since the last call, as a JSON array.
    pub fn drain_events_json(&mut self) -> String {
        let events = self.app.take_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Currently visible nodes (gates applied), as a JSON array.
    pub fn visible_nodes_json(&self) -> String {
        let nodes: Vec<_> = self
            .app
            .visible_nodes()
            .into_iter()
            .map(|s| &s.node)
            .collect();
        serde_json::to_string(&nodes).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn discovered_ids_json(&self) -> String {
        serde_json::to_string(&self.app.discovery.discovered).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn achievements_json(&self) -> String {
        serde_json::to_string(self.app.achievements.all()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn progress_percent(&self) -> u32 {
        self.app.progress_percent()
    }

    pub fn session_duration_secs(&self) -> f64 {
        self.app.session_duration_secs() as f64
    }

    pub fn reset(&mut self) {
        self.app.reset();
        self.save_persisted();
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

fn glam_vec(x: f32, y: f32, z: f32) -> glam::Vec3 {
    glam::Vec3::new(x, y, z)
}
