//! Drone Orient entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement};

    use drone_orient::audio::AudioManager;
    use drone_orient::consts::*;
    use drone_orient::sim::{ArrowKey, GamePhase, GameState, TickInput, autopilot, tick};
    use drone_orient::{Settings, text};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        audio: Option<AudioManager>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Idle/demo mode - autopilot flies the drone
        idle_mode: bool,
        idle_ticks: u32,
        // Track phase for overlay updates
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let mut state = GameState::new(seed);
            state.reroll_facing_on_capture = settings.reroll_facing_on_capture;
            Self {
                state,
                settings,
                audio: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                idle_mode: false,
                idle_ticks: 0,
                last_phase: GamePhase::Title,
            }
        }

        /// Create the audio context on the first user gesture
        fn ensure_audio(&mut self) {
            if self.audio.is_none() {
                self.audio = AudioManager::new(self.settings.effective_volume());
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if self.idle_mode {
                    self.idle_ticks += 1;
                    if self.idle_ticks >= AUTOPILOT_INTERVAL_TICKS {
                        self.idle_ticks = 0;
                        self.input.keys.extend(autopilot::next_key(&self.state));
                    }
                }

                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.clear();
            }

            for event in self.state.drain_events() {
                if let Some(audio) = &self.audio {
                    audio.play_event(event);
                }
            }
        }

        /// Update DOM elements from game state
        fn render(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let lang = self.settings.language;

            // Drone position and facing
            if let Some(drone) = html_element(&document, "drone") {
                set_position(&drone, self.state.drone.pos.x, self.state.drone.pos.y);
                drone.set_class_name(&format!("drone-{}", self.state.drone.facing.as_str()));
            }

            if let Some(target) = html_element(&document, "target") {
                set_position(&target, self.state.target.x, self.state.target.y);
            }

            let score = self.state.score.to_string();
            set_text(&document, "score", &score);
            set_text(&document, "final-score", &score);

            if self.state.phase != GamePhase::Title {
                set_text(&document, "hint-text", &text::render_hint(&self.state.hint(), lang));
            }

            // Overlays only change on phase transitions
            let phase = self.state.phase;
            if phase != self.last_phase {
                set_hidden(&document, "start-screen", phase != GamePhase::Title);
                set_hidden(&document, "game-over-screen", phase != GamePhase::GameOver);

                if phase == GamePhase::GameOver {
                    if let Some(reason) = self.state.last_failure {
                        set_text(&document, "failure-reason", text::failure_text(reason, lang));
                    }
                    set_text(
                        &document,
                        "hint-message",
                        &text::render_hint(&self.state.hint(), lang),
                    );
                }
                self.last_phase = phase;
            }
        }
    }

    fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_position(el: &HtmlElement, x: f32, y: f32) {
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", x));
        let _ = style.set_property("top", &format!("{}px", y));
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Drone Orient starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Lay out the world from the shared geometry constants
        if let Some(world) = html_element(&document, "game-container") {
            let style = world.style();
            let _ = style.set_property("width", &format!("{}px", WORLD_SIZE));
            let _ = style.set_property("height", &format!("{}px", WORLD_SIZE));
        }
        if let Some(drone) = html_element(&document, "drone") {
            let style = drone.style();
            let _ = style.set_property("width", &format!("{}px", DRONE_SIZE));
            let _ = style.set_property("height", &format!("{}px", DRONE_SIZE));
        }
        for id in ["drone", "target", "start-btn", "restart-btn", "hint-text"] {
            if document.get_element_by_id(id).is_none() {
                log::warn!("Missing #{} element", id);
            }
        }

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Drone Orient running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            if let Some(arrow) = ArrowKey::from_dom_key(&key) {
                // Keep arrows from scrolling the page
                event.prevent_default();
                game.borrow_mut().input.keys.push(arrow);
                return;
            }
            if key == "i" || key == "I" {
                let mut g = game.borrow_mut();
                g.idle_mode = !g.idle_mode;
                g.idle_ticks = 0;
                log::info!("Idle mode: {}", g.idle_mode);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for id in ["start-btn", "restart-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.ensure_audio();
                g.input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drone_orient::sim::{GamePhase, GameState, MoveOutcome, TickInput, autopilot, tick};
    use drone_orient::{Settings, text};

    env_logger::init();
    log::info!("Drone Orient (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let settings = Settings::load();

    let mut state = GameState::new(seed);
    state.reroll_facing_on_capture = settings.reroll_facing_on_capture;
    state.start_or_restart();
    println!("Seed {}: {}", seed, text::render_hint(&state.hint(), settings.language));

    const DEMO_TICKS: u32 = 3_000;
    for _ in 0..DEMO_TICKS {
        let mut input = TickInput::default();
        input.keys.extend(autopilot::next_key(&state));
        for outcome in tick(&mut state, &input) {
            match outcome {
                MoveOutcome::Captured => println!(
                    "Gem {} collected at ({:.0}, {:.0}), facing {}",
                    state.score,
                    state.drone.pos.x,
                    state.drone.pos.y,
                    state.drone.facing.as_str()
                ),
                MoveOutcome::Failed(reason) => {
                    println!("{}", text::failure_text(reason, settings.language))
                }
                MoveOutcome::Moved => {}
            }
        }
        state.drain_events().for_each(drop);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!("Final score: {}", state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
