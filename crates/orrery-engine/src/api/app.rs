// api/app.rs
//
// The aggregate the host drives: every store, the camera director, the
// position table and the clock, wired together behind one tick(). All
// state lives here explicitly — constructed, injected, resettable — and is
// only ever mutated from the single frame loop.

use crate::api::types::AppEvent;
use crate::bodies::{PositionTable, SystemRegistry};
use crate::camera::{CameraDirector, CameraTuning, CORE_NODE_ID};
use crate::content::nodes::{ContentCatalog, NodeKind};
use crate::core::time::SimClock;
use crate::input::{map_key, InputEvent, InputQueue, KeyInput, SequenceDetector, UiAction};
use crate::persist::{
    load_achievements, load_discovery, save_achievements, save_discovery, KeyValueStore,
};
use crate::stores::{
    Achievement, AchievementStore, DiscoveryStore, EffectTimer, EffectsState, GraphStore,
    NavigationStore, NodeState, TerminalStore,
};

/// Engine-level tuning, provided by the host once at startup.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    pub camera: CameraTuning,
    /// Seconds before an achievement popup auto-dismisses.
    pub popup_duration: f32,
    /// Seconds a triggered glitch flash lasts.
    pub glitch_duration: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            camera: CameraTuning::default(),
            popup_duration: 4.0,
            glitch_duration: 1.5,
        }
    }
}

/// The whole explorable system.
pub struct Orrery {
    pub config: OrreryConfig,
    pub registry: SystemRegistry,
    pub catalog: ContentCatalog,
    pub graph: GraphStore,
    pub discovery: DiscoveryStore,
    pub achievements: AchievementStore,
    pub navigation: NavigationStore,
    pub terminal: TerminalStore,
    pub effects: EffectsState,
    pub camera: CameraDirector,
    pub positions: PositionTable,
    clock: SimClock,
    input: InputQueue,
    events: Vec<AppEvent>,
    konami: SequenceDetector,
    /// Latest wall-clock ms reported by the host; used for visit
    /// timestamps and session statistics.
    now_ms: u64,
}

impl Orrery {
    pub fn new(
        registry: SystemRegistry,
        catalog: ContentCatalog,
        achievements: Vec<Achievement>,
        config: OrreryConfig,
    ) -> Self {
        let graph = GraphStore::new(&catalog);
        let positions = PositionTable::new(&registry);
        let camera = CameraDirector::new(config.camera.clone());
        Self {
            config,
            registry,
            catalog,
            graph,
            discovery: DiscoveryStore::new(),
            achievements: AchievementStore::new(achievements),
            navigation: NavigationStore::new(),
            terminal: TerminalStore::new(),
            effects: EffectsState::new(),
            camera,
            positions,
            clock: SimClock::new(),
            input: InputQueue::new(),
            events: Vec::new(),
            konami: SequenceDetector::new(),
            now_ms: 0,
        }
    }

    /// The default portfolio with default tuning.
    pub fn with_defaults() -> Self {
        Self::new(
            crate::bodies::default_registry(),
            crate::content::default_catalog(),
            crate::content::default_achievements(),
            OrreryConfig::default(),
        )
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Replace discovery state and merge achievement flags from storage.
    /// Call once at startup, before the first tick.
    pub fn load_persisted(&mut self, store: &dyn KeyValueStore) {
        self.discovery = load_discovery(store);
        let table = self.achievements.all().to_vec();
        self.achievements = load_achievements(store, table);
    }

    /// Write both documents. Fire-and-forget, last-write-wins.
    pub fn save_persisted(&self, store: &mut dyn KeyValueStore) {
        save_discovery(store, &self.discovery);
        save_achievements(store, &self.achievements);
    }

    // ── Frame loop ───────────────────────────────────────────────────

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run one frame: clock, input, positions, camera, timers — in that
    /// order. Positions are always computed before the camera reads them,
    /// so a chased body is never a frame stale.
    pub fn tick(&mut self, dt: f32, now_ms: u64) {
        self.now_ms = now_ms;
        self.discovery.start_session(now_ms);
        let elapsed = self.clock.advance(dt);

        let pending = self.input.drain();
        for event in pending {
            self.handle_event(event);
        }

        self.positions.update(&self.registry, elapsed);

        let focused = self.graph.focused().map(String::from);
        let parent = self.navigation.tracked_parent().map(String::from);
        self.camera.tick(
            focused.as_deref(),
            &self.registry,
            &self.catalog,
            parent.as_deref(),
            elapsed,
            dt,
        );

        for fired in self.effects.tick(dt) {
            match fired {
                EffectTimer::GlitchEnd => self.events.push(AppEvent::GlitchEnded),
                EffectTimer::PopupDismiss => self.achievements.clear_recent_unlock(),
            }
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::NodeClicked { id, parent } => {
                // A moon click must pin its rendered parent before the
                // focus change, or resolution can pick the wrong copy of a
                // shared skill. A planet click pins itself for later bare
                // moon focuses (e.g. from the console).
                if let Some(parent) = parent {
                    self.navigation.set_tracked_parent(Some(parent));
                } else if self.registry.planet(&id).is_some() {
                    self.navigation.set_tracked_parent(Some(id.clone()));
                }
                self.visit_node(&id);
            }
            InputEvent::NodeHovered { id } => self.graph.set_hovered(id),
            InputEvent::SunClicked => {
                self.discovery.set_sun_clicked();
                self.visit_node(CORE_NODE_ID);
            }
            InputEvent::ConnectionFollowed { from: _, to } => {
                self.discovery.record_connection_followed();
                self.visit_node(&to);
            }
            InputEvent::Key(key) => self.handle_key(key),
        }
    }

    /// The visit pipeline — everything one focus click implies, applied
    /// atomically from the caller's perspective.
    pub fn visit_node(&mut self, id: &str) {
        let (kind, was_locked) = match self.graph.node(id) {
            Some(state) => (state.node.kind, state.locked),
            None => {
                log::warn!("visit for unknown node id: {id}");
                return;
            }
        };

        self.discovery.record_click();
        if was_locked {
            self.graph.unlock(id);
        }
        self.graph.discover(id);
        self.discovery.discover(id);

        self.graph.set_focused(Some(id.to_string()));
        self.navigation.push(id);
        self.events.push(AppEvent::FocusChanged {
            id: Some(id.to_string()),
        });

        match kind {
            NodeKind::Secret => {
                self.discovery.record_secret();
                self.check_achievements("secrets", self.discovery.secrets_found);
            }
            NodeKind::Philosophy => {
                self.discovery.record_philosophy();
                self.check_achievements("philosophy", self.discovery.philosophy_read);
            }
            _ => {}
        }

        self.check_achievements("nodes", self.discovery.discovered_count() as u32);

        self.discovery.record_visit_event(self.now_ms);
        let rate = self.discovery.nodes_per_minute(self.now_ms);
        self.check_achievements("speed", rate);

        match kind {
            NodeKind::Experience => {
                self.discovery.track_planet_visit(id);
                self.check_achievements("planets", self.discovery.planets_visited.len() as u32);
            }
            NodeKind::Project => {
                self.discovery.track_project_visit(id);
                self.check_achievements("projects", self.discovery.projects_visited.len() as u32);
            }
            NodeKind::Philosophy => {
                self.discovery.track_nebula_visit(id);
                self.check_achievements("nebulae", self.discovery.nebulae_visited.len() as u32);
            }
            _ => {}
        }
    }

    /// Clear focus and fly back to the overview.
    pub fn clear_focus(&mut self) {
        self.graph.set_focused(None);
        self.events.push(AppEvent::FocusChanged { id: None });
    }

    fn check_achievements(&mut self, category: &str, value: u32) {
        if let Some(unlocked) = self.achievements.check_and_unlock(category, value) {
            let id = unlocked.id.clone();
            self.events.push(AppEvent::AchievementUnlocked { id });
            self.effects.arm_popup_dismiss(self.config.popup_duration);
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if !key.from_text_input && !key.modifier && self.konami.feed(&key.code) {
            self.events.push(AppEvent::EasterEggTriggered);
            self.effects.trigger_glitch(self.config.glitch_duration);
            self.events.push(AppEvent::GlitchStarted);
        }

        let Some(action) = map_key(&key) else { return };
        match action {
            UiAction::ToggleConsole => self.terminal.toggle(),
            UiAction::Escape => {
                // Console first; only then the focused node.
                if self.terminal.is_open {
                    self.terminal.toggle();
                } else if self.graph.focused().is_some() {
                    self.clear_focus();
                }
            }
            UiAction::HistoryBack => {
                if let Some(prev) = self.navigation.go_back() {
                    self.graph.set_focused(Some(prev.clone()));
                    self.events.push(AppEvent::FocusChanged { id: Some(prev) });
                }
            }
            UiAction::HistoryForward => {
                if let Some(next) = self.navigation.go_forward() {
                    self.graph.set_focused(Some(next.clone()));
                    self.events.push(AppEvent::FocusChanged { id: Some(next) });
                }
            }
            UiAction::ToggleMiniMap => self.navigation.toggle_minimap(),
            UiAction::ToggleExplorationBoard => self.navigation.toggle_exploration_board(),
            UiAction::OpenHelp => {
                if !self.terminal.is_open {
                    self.terminal.toggle();
                }
            }
        }
    }

    // ── Console boundary ─────────────────────────────────────────────
    // The fixed set of side effects the command console may request.

    /// Focus a node by id. Refused (returns false) while the node is still
    /// gated out of view — the console tells the user to keep exploring.
    pub fn console_focus(&mut self, id: &str) -> bool {
        let visible = match self.graph.node(id) {
            Some(state) => self.graph.is_visible(state, &self.discovery),
            None => false,
        };
        if !visible {
            return false;
        }
        self.visit_node(id);
        true
    }

    /// Mark a node discovered without focusing it.
    pub fn console_discover(&mut self, id: &str) {
        self.graph.discover(id);
        self.discovery.discover(id);
    }

    /// Force-unlock an achievement by id.
    pub fn console_unlock_achievement(&mut self, id: &str) -> bool {
        if self.achievements.unlock(id) {
            self.events.push(AppEvent::AchievementUnlocked { id: id.to_string() });
            self.effects.arm_popup_dismiss(self.config.popup_duration);
            true
        } else {
            false
        }
    }

    /// Record one executed console command (feeds the `terminal` counter).
    pub fn console_command_used(&mut self) {
        self.terminal.increment_use_count();
        self.discovery.record_terminal_command();
        self.check_achievements("terminal", self.discovery.terminal_commands_used);
    }

    pub fn set_theme(&mut self, name: &str) {
        self.effects.set_theme(name);
        self.events.push(AppEvent::ThemeChanged {
            name: name.to_string(),
        });
    }

    pub fn toggle_matrix_rain(&mut self) {
        self.effects.toggle_matrix_rain();
        self.events.push(AppEvent::MatrixRainToggled {
            on: self.effects.matrix_rain,
        });
    }

    pub fn trigger_glitch(&mut self) {
        self.effects.trigger_glitch(self.config.glitch_duration);
        self.events.push(AppEvent::GlitchStarted);
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Nodes currently visible given the unlock gates.
    pub fn visible_nodes(&self) -> Vec<&NodeState> {
        self.graph.visible_nodes(&self.discovery)
    }

    /// Discovered share of the currently-unlocked total, in percent.
    pub fn progress_percent(&self) -> u32 {
        self.discovery.progress_percent(self.graph.unlocked_total())
    }

    pub fn session_duration_secs(&self) -> u64 {
        self.discovery.session_duration_secs(self.now_ms)
    }

    /// Full teardown back to a fresh profile. Cancels every pending timer.
    pub fn reset(&mut self) {
        self.graph.reset(&self.catalog);
        self.discovery.reset();
        self.achievements.reset();
        self.navigation.reset();
        self.terminal.reset();
        self.effects.reset();
        self.camera.reset();
        self.clock.reset();
        self.konami.reset();
        self.input.drain();
        self.events.clear();
    }
}
