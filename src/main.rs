//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_dash::audio::{AudioManager, SoundEffect};
    use dino_dash::consts::*;
    use dino_dash::render::Renderer;
    use dino_dash::render::confetti::ConfettiFx;
    use dino_dash::sim::{GameEvent, GameState, TickInput, tick};
    use dino_dash::theme::Theme;
    use dino_dash::{highscores, mint};

    thread_local! {
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        confetti: ConfettiFx,
        audio: AudioManager,
        theme: Theme,
        input: TickInput,
        // Keep the banner up until the next run starts
        new_high_this_run: bool,
    }

    impl Game {
        /// Advance the simulation one frame and fan events out to the
        /// audio, persistence, confetti and mint collaborators
        fn update(&mut self, time: f64) {
            let input = self.input;
            self.input = TickInput::default();

            for event in tick(&mut self.state, &input, time) {
                match event {
                    GameEvent::Started => {
                        self.new_high_this_run = false;
                        self.audio.start_track();
                    }
                    GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                    GameEvent::GameOver => {
                        self.audio.stop_track();
                        self.audio.play(SoundEffect::GameOver);
                        highscores::save(self.state.hi_score);
                    }
                    GameEvent::NewHighScore(score) => {
                        self.new_high_this_run = true;
                        self.audio.play(SoundEffect::Celebrate);
                        self.confetti.celebrate();
                        mint::mint_high_score(score);
                    }
                }
            }
        }

        fn render(&mut self) {
            self.renderer.draw(&self.state, &self.theme, self.new_high_this_run);
            self.confetti.step();
        }

        /// Rebuild the board for a new viewport width. The run in progress
        /// is abandoned; the high score carries over.
        fn rebuild(&mut self, view_cols: f32) {
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(seed, view_cols, self.state.hi_score);
            self.input = TickInput::default();
            self.new_high_this_run = false;
            self.audio.stop_track();
            self.renderer.resize(view_cols);
            self.confetti.resize(view_cols as u32, BOARD_ROWS);
        }
    }

    /// Board width in cells for the current viewport
    fn current_view_cols(window: &web_sys::Window) -> f32 {
        let inner = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_VIEW_COLS as f64) as f32;
        inner.min(DEFAULT_VIEW_COLS)
    }

    fn canvas_by_id(document: &web_sys::Document, id: &str) -> HtmlCanvasElement {
        document
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("no #{id} canvas"))
            .dyn_into()
            .expect("not a canvas")
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let board = canvas_by_id(&document, "board");
        let fx = canvas_by_id(&document, "fx");

        let view_cols = current_view_cols(&window);
        let seed = js_sys::Date::now() as u64;
        let hi_score = highscores::load();

        let renderer = Renderer::new(board.clone()).expect("renderer init failed");
        renderer.resize(view_cols);
        let confetti =
            ConfettiFx::new(fx, seed.wrapping_add(1)).expect("fx canvas init failed");
        confetti.resize(view_cols as u32, BOARD_ROWS);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, view_cols, hi_score),
            renderer,
            confetti,
            audio: AudioManager::new(),
            theme: Theme::load(),
            input: TickInput::default(),
            new_high_this_run: false,
        }));

        log::info!("Game initialized with seed {seed}, {view_cols} columns, high score {hi_score}");

        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        setup_input_handlers(&board, game.clone());
        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Dino Dash running!");
    }

    /// Apply a theme built from NFT metadata JSON. Exposed to the wallet
    /// integration on the hosting page.
    pub fn apply_theme_json(metadata: &str) -> bool {
        let Some(theme) = Theme::from_nft_metadata(metadata) else {
            log::warn!("Rejected NFT metadata, keeping current theme");
            return false;
        };
        theme.save();
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().theme = theme.clone();
            }
        });
        log::info!("Applied NFT theme {}", theme.id);
        true
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    " " | "Spacebar" | "ArrowUp" => {
                        event.prevent_default();
                        game.borrow_mut().input.primary_action = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.primary_action = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.primary_action = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().expect("no window");
            let cols = current_view_cols(&window);
            let mut g = game.borrow_mut();
            if (cols - g.state.view_cols).abs() > f32::EPSILON {
                log::info!("Viewport changed, rebuilding board at {cols} columns");
                g.rebuild(cols);
            }
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let mut g = game.borrow_mut();
            g.update(time);
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

/// Entry point for the hosting page's wallet code. Takes NFT metadata JSON
/// and swaps the active theme if the metadata parses.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn apply_nft_theme(metadata: String) -> bool {
    wasm_game::apply_theme_json(&metadata)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_dash::consts::DEFAULT_VIEW_COLS;
    use dino_dash::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Dino Dash (native) starting...");
    log::info!("Native mode is a headless demo - build for wasm32 to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut state = GameState::new(seed, DEFAULT_VIEW_COLS, 0);

    // Scripted run: start immediately, then hop every 40 frames
    let press = TickInput {
        primary_action: true,
    };
    let idle = TickInput::default();

    for frame in 0..2000u32 {
        let input = if frame == 0 || frame % 40 == 0 {
            press
        } else {
            idle
        };
        let now_ms = frame as f64 * (1000.0 / 60.0);
        for event in tick(&mut state, &input, now_ms) {
            log::info!("frame {frame}: {event:?}");
        }
        if state.phase == dino_dash::sim::GamePhase::Over {
            break;
        }
    }

    log::info!(
        "Demo finished: score {}, high score {}",
        state.score,
        state.hi_score
    );
}
