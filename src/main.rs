//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use breakout::input::{Key, KeyEvent};
    use breakout::render::CanvasRenderer;
    use breakout::{GameConfig, SessionController};

    /// Game instance holding all state
    struct Game {
        controller: SessionController,
        renderer: CanvasRenderer,
        /// Set once a frame fails; the loop is not rescheduled
        halted: bool,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("stage")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        let renderer = CanvasRenderer::new(&canvas, &config).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let controller = SessionController::new(config).with_autopilot_seed(seed);
        let mut game = Game {
            controller,
            renderer,
            halted: false,
        };
        game.controller.start(&mut game.renderer);
        let game = Rc::new(RefCell::new(game));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Breakout running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(k) = Key::from_dom_key(&key) {
                    event.prevent_default();
                    g.controller.handle_key(KeyEvent::Pressed(k));
                } else if key == "i" || key == "I" {
                    g.controller.toggle_autopilot();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(k) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().controller.handle_key(KeyEvent::Released(k));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let Game {
                controller,
                renderer,
                halted,
            } = &mut *g;

            if let Err(e) = controller.frame(time, renderer) {
                log::error!("Game loop stopped: {}", e);
                *halted = true;
            }
            if *halted {
                return;
            }
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
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use breakout::render::HeadlessRenderer;
    use breakout::{GameConfig, SessionController, SessionEvent};

    /// Run Breakout headlessly with the autopilot playing
    #[derive(Parser, Debug)]
    #[command(name = "breakout", version)]
    struct Args {
        /// JSON config file (partial configs fall back to defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of sessions to play to completion
        #[arg(long, default_value_t = 3)]
        sessions: u64,
        /// Give up after this many frames
        #[arg(long, default_value_t = 1_000_000)]
        max_frames: u64,
        /// Autopilot seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => GameConfig::load_from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::load(),
        };
        log::info!("Breakout (native) starting, {} session(s)", args.sessions);

        let mut controller = SessionController::new(config).with_autopilot_seed(args.seed);
        let mut renderer = HeadlessRenderer::new();
        controller.start(&mut renderer);
        controller.set_autopilot(true);

        let frame_ms = 1000.0 / 60.0;
        let (mut won, mut lost) = (0u64, 0u64);
        for frame in 0..args.max_frames {
            match controller.frame(frame as f64 * frame_ms, &mut renderer)? {
                SessionEvent::Won { score } => {
                    won += 1;
                    println!("session {}: won, score {}", controller.sessions_started(), score);
                }
                SessionEvent::Lost { score } => {
                    lost += 1;
                    println!("session {}: lost, score {}", controller.sessions_started(), score);
                }
                _ => {}
            }
            if won + lost >= args.sessions {
                break;
            }
        }

        println!("{} won, {} lost, {} frames drawn", won, lost, renderer.frames);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
