//! Skyreach entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use skyreach::consts::*;
    use skyreach::render::{self, DrawCommand};
    use skyreach::sim::{GamePhase, GameState, TickInput, tick};
    use skyreach::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: Option<CanvasRenderingContext2d>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        highscores: HighScores,
        settings: Settings,
        /// Scheduling flag: the loop re-arms itself only while true
        running: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase to record scores once per terminal transition
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let highscores = HighScores::load();
            let mut state = GameState::new(seed);
            state.high_score = highscores.top_score().unwrap_or(0);
            Self {
                state,
                ctx: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                highscores,
                settings: Settings::load(),
                running: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Idle,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.jump = false;
                self.input.pause = false;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            // Record the run on terminal transitions, once
            let phase = self.state.phase;
            if phase != self.last_phase {
                if self.state.is_terminal() {
                    let won = phase == GamePhase::GameWon;
                    let progress = self.state.progress_percent();
                    if let Some(rank) = self.highscores.add_score(
                        self.state.score,
                        progress,
                        won,
                        js_sys::Date::now(),
                    ) {
                        log::info!("Run ended at rank {} ({} points)", rank, self.state.score);
                        self.highscores.save();
                    }
                    if let Some(top) = self.highscores.top_score() {
                        self.state.high_score = self.state.high_score.max(top);
                    }
                }
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(ref ctx) = self.ctx else {
                return;
            };

            // Sky
            ctx.set_global_alpha(1.0);
            ctx.set_fill_style_str("#1a2238");
            ctx.fill_rect(0.0, 0.0, VIEW_WIDTH as f64, VIEW_HEIGHT as f64);

            for command in render::draw_list(&self.state, self.settings.reduced_flicker) {
                match command {
                    DrawCommand::Rect {
                        x,
                        y,
                        width,
                        height,
                        color,
                        rotation,
                        alpha,
                    } => {
                        ctx.set_global_alpha(alpha as f64);
                        ctx.set_fill_style_str(color);
                        if rotation != 0.0 {
                            ctx.save();
                            let cx = (x + width / 2.0) as f64;
                            let cy = (y + height / 2.0) as f64;
                            let _ = ctx.translate(cx, cy);
                            let _ = ctx.rotate(rotation as f64);
                            ctx.fill_rect(
                                -(width as f64) / 2.0,
                                -(height as f64) / 2.0,
                                width as f64,
                                height as f64,
                            );
                            ctx.restore();
                        } else {
                            ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
                        }
                    }
                    DrawCommand::Circle {
                        x,
                        y,
                        radius,
                        color,
                        alpha,
                    } => {
                        ctx.set_global_alpha(alpha as f64);
                        ctx.set_fill_style_str(color);
                        ctx.begin_path();
                        let _ = ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
                        ctx.fill();
                    }
                }
            }
            ctx.set_global_alpha(1.0);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = render::hud(&self.state);

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-highscore") {
                el.set_text_content(Some(&hud.high_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-health") {
                let filled = hud.health as usize;
                let empty = (hud.max_health - hud.health) as usize;
                el.set_text_content(Some(&format!(
                    "{}{}",
                    "\u{2665}".repeat(filled),
                    "\u{2661}".repeat(empty)
                )));
            }
            if let Some(el) = document.get_element_by_id("hud-progress") {
                el.set_text_content(Some(&format!("{}%", hud.progress_percent)));
            }
            if let Some(el) = document.get_element_by_id("hud-hint") {
                el.set_text_content(Some(hud.hint));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    el.set_text_content(Some(""));
                }
            }

            // Terminal overlays are pure presentation of the phase flags
            set_overlay(&document, "game-over", self.state.phase == GamePhase::GameOver);
            set_overlay(&document, "victory", self.state.phase == GamePhase::GameWon);
            set_overlay(&document, "pause-menu", self.state.phase == GamePhase::Paused);
            if self.state.is_terminal() {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.state.score.to_string()));
                }
            }
        }

        /// Rebuild everything except the high score
        fn restart(&mut self, seed: u64) {
            self.state.reset(seed);
            self.accumulator = 0.0;
            self.input = TickInput::default();
            self.last_phase = self.state.phase;
            log::info!("Game reset with seed: {}", seed);
        }
    }

    fn set_overlay(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyreach starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(VIEW_WIDTH as u32);
        canvas.set_height(VIEW_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut().ctx = Some(ctx);

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        // Start immediately; the start button is a no-op once running
        start_game(&game);

        log::info!("Skyreach running!");
    }

    /// Begin ticking and arm the frame loop (no-op if already running)
    fn start_game(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.running {
                return;
            }
            g.running = true;
            g.last_time = 0.0;
            g.state.start();
        }
        request_animation_frame(game.clone());
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Held keys move; jump/pause/reset are edge-triggered
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = true,
                    "ArrowRight" | "d" | "D" => g.input.right = true,
                    "ArrowUp" | "w" | "W" | " " => {
                        if !event.repeat() {
                            g.input.jump = true;
                        }
                    }
                    "Escape" | "p" | "P" => g.input.pause = true,
                    "r" | "R" => {
                        let seed = js_sys::Date::now() as u64;
                        g.restart(seed);
                        drop(g);
                        start_game(&game);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_game(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.pause = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("stop-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                // Halt scheduling, preserve state
                game.borrow_mut().running = false;
                log::info!("Game loop stopped");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // The terminal overlays exit only through reset
        for id in ["reset-btn", "retry-btn", "play-again-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let seed = js_sys::Date::now() as u64;
                    game.borrow_mut().restart(seed);
                    start_game(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase == GamePhase::Running {
                        g.input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    g.input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
            g.running
        };

        // Stop flag checked before scheduling the next frame
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyreach::render;
    use skyreach::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Skyreach (native) starting...");
    log::info!("Headless demo run - build for wasm32 for the playable version");

    // Scripted run: hold right and hop periodically until the run ends
    let mut state = GameState::new(7);
    state.start();

    for frame in 0u32..3600 {
        let input = TickInput {
            right: true,
            jump: frame % 45 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);
        if state.is_terminal() {
            break;
        }
    }

    let hud = render::hud(&state);
    match state.phase {
        GamePhase::GameWon => log::info!(
            "Demo won: {} points, {} ticks",
            hud.score,
            state.time_ticks
        ),
        GamePhase::GameOver => log::info!(
            "Demo ended at {}% with {} points",
            hud.progress_percent,
            hud.score
        ),
        _ => log::info!(
            "Demo timed out at {}% with {} points",
            hud.progress_percent,
            hud.score
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
