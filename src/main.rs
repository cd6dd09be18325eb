//! Sky Hop entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use sky_hop::renderer::canvas::CanvasSurface;
    use sky_hop::renderer::draw_frame;
    use sky_hop::sim::{Facing, GamePhase, GameState, TickInput, tick};
    use sky_hop::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, canvas: &HtmlCanvasElement) -> Self {
            let state = GameState::new(seed, Tuning::default());
            let last_phase = state.phase;
            Self {
                state,
                surface: CanvasSurface::new(canvas),
                input: TickInput::default(),
                last_phase,
            }
        }

        /// One simulation step plus a redraw
        fn frame(&mut self, now_ms: f64) {
            let input = self.input;
            tick(&mut self.state, &input, now_ms);
            // Inputs are edges; clear them once consumed
            self.input = TickInput::default();

            if self.state.phase != self.last_phase {
                match self.state.phase {
                    GamePhase::GameOver => {
                        log::info!("game over at score {}", self.state.score)
                    }
                    GamePhase::Running => log::info!("restarted"),
                }
                self.last_phase = self.state.phase;
            }

            draw_frame(&self.state, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Sky Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        canvas.set_width(tuning.board.x as u32);
        canvas.set_height(tuning.board.y as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, &canvas)));
        log::info!("session seed: {seed}");

        setup_keyboard(game.clone());
        request_animation_frame(game);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.code().as_str() {
                "ArrowRight" | "KeyD" => g.input.steer = Some(Facing::Right),
                "ArrowLeft" | "KeyA" => g.input.steer = Some(Facing::Left),
                "Space" => g.input.action = true,
                _ => {}
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        game.borrow_mut().frame(js_sys::Date::now());
        // Always reschedule, even after a game over, so the final frame and
        // its overlay keep being drawn.
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Hop (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    run_demo(seed);
}

/// Headless demo session at a synthetic 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64) {
    use sky_hop::sim::{Facing, GamePhase, GameState, TickInput, tick};
    use sky_hop::tuning::Tuning;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_TICKS: u64 = 60 * 60; // one simulated minute

    let mut state = GameState::new(seed, Tuning::default());
    log::info!("demo session seed: {seed}");

    let mut now_ms = 0.0;
    for frame in 0..MAX_TICKS {
        // Sway left and right so the demo visits a few platforms
        let input = TickInput {
            steer: match frame % 120 {
                0 => Some(Facing::Right),
                60 => Some(Facing::Left),
                _ => None,
            },
            action: false,
        };
        tick(&mut state, &input, now_ms);
        now_ms += FRAME_MS;

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!("demo over after {} ticks", state.time_ticks);
    println!(
        "survived {} ticks, final score {} (max {})",
        state.time_ticks, state.score, state.max_score
    );
}
