//! Skygate entry point
//!
//! On the web this wires the canvas, input listeners and the display-refresh
//! loop. Natively it runs a headless demo session at a fixed tick rate.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use skygate::Game;
    use skygate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use skygate::renderer::WebCanvas;
    use skygate::sim::GameEvent;

    type FrameCallback = Closure<dyn FnMut(f64)>;

    /// Everything the refresh loop needs between frames
    struct App {
        game: Game,
        surface: Option<WebCanvas>,
        /// ID of the pending animation frame, if any
        frame_handle: Option<i32>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Skygate starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let canvas = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        let surface = canvas.as_ref().and_then(|canvas| {
            canvas.set_width(FIELD_WIDTH as u32);
            canvas.set_height(FIELD_HEIGHT as u32);
            canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
                .map(|ctx| WebCanvas::new(ctx, FIELD_WIDTH, FIELD_HEIGHT))
        });
        if surface.is_none() {
            log::warn!("no 2D canvas available; frames will be skipped");
        }

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed),
            surface,
            frame_handle: None,
        }));

        if let Some(canvas) = canvas.as_ref() {
            setup_input_handlers(canvas, app.clone());
        }
        setup_teardown(app.clone());
        start_loop(app);

        log::info!("Skygate running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click: left half jumps, right half shoots
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let width = canvas_clone.client_width() as f32;
                app.borrow_mut()
                    .game
                    .pointer_down(event.offset_x() as f32, width);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start, one command per new touch point
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let rect = canvas_clone.get_bounding_client_rect();
                let width = rect.width() as f32;
                let touches = event.changed_touches();
                let mut app = app.borrow_mut();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.get(i) {
                        let x = touch.client_x() as f32 - rect.left() as f32;
                        app.game.pointer_down(x, width);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Cancel the pending frame when the page goes away
    fn setup_teardown(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut app = app.borrow_mut();
            if let (Some(handle), Some(window)) = (app.frame_handle.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(handle);
            }
            app.game.shutdown();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Self-rescheduling refresh callback
    fn start_loop(app: Rc<RefCell<App>>) {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let callback_clone = callback.clone();
        let app_clone = app.clone();

        *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
            let mut guard = app_clone.borrow_mut();
            let App {
                game,
                surface,
                frame_handle,
            } = &mut *guard;
            // Not rescheduling ends the loop
            if !game.is_running() {
                *frame_handle = None;
                return;
            }

            for event in game.frame(surface.as_mut()) {
                if let GameEvent::GameOver { score, best, .. } = event {
                    log::info!("final score {} (best {})", score, best);
                }
            }

            *frame_handle = request_frame(&callback_clone);
        }));

        let handle = request_frame(&callback);
        app.borrow_mut().frame_handle = handle;
    }

    fn request_frame(callback: &Rc<RefCell<Option<FrameCallback>>>) -> Option<i32> {
        let window = web_sys::window()?;
        let borrowed = callback.borrow();
        let closure = borrowed.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
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
    native::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use serde::Serialize;

    use skygate::renderer::{DisplayList, DrawCommand};
    use skygate::sim::{GameEvent, GamePhase};
    use skygate::{Game, Tuning};

    /// Ticks per second for the headless timer
    const TICK_RATE: u32 = 60;
    /// Length of the demo session
    const DEMO_TICKS: u32 = 60 * TICK_RATE;

    #[derive(Serialize)]
    struct Summary<'a> {
        seed: u64,
        ticks: u32,
        rounds: u32,
        phase: GamePhase,
        score: u64,
        session_best: u64,
        obstacles: usize,
        projectiles: usize,
        draw_commands: usize,
        texts: Vec<&'a str>,
        last_frame_head: &'a [DrawCommand],
    }

    pub fn run() {
        env_logger::init();
        log::info!("Skygate (native) starting headless demo...");

        let seed = std::env::var("SKYGATE_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0x5EED);
        let tuning = match std::env::var("SKYGATE_TUNING") {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring SKYGATE_TUNING: {}", e);
                Tuning::default()
            }),
            Err(_) => Tuning::default(),
        };
        // Pace ticks in real time only when asked to
        let realtime = std::env::var_os("SKYGATE_REALTIME").is_some();

        let mut game = Game::with_tuning(seed, tuning);
        game.set_idle_mode(true);

        let mut list = DisplayList::default();
        let mut rounds = 0;
        let step = Duration::from_secs(1) / TICK_RATE;
        let mut next_tick = Instant::now();

        for _ in 0..DEMO_TICKS {
            list.clear();
            for event in game.frame(Some(&mut list)) {
                match event {
                    GameEvent::GameOver { score, best, .. } => {
                        rounds += 1;
                        log::info!("round {} over: score {} (best {})", rounds, score, best);
                    }
                    GameEvent::ObstacleDestroyed { obstacle_id, .. } => {
                        log::debug!("obstacle {} shot down", obstacle_id);
                    }
                    _ => {}
                }
            }

            if realtime {
                next_tick += step;
                if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
                    std::thread::sleep(wait);
                }
            }
        }
        game.shutdown();

        let state = game.state();
        let summary = Summary {
            seed,
            ticks: DEMO_TICKS,
            rounds,
            phase: state.phase,
            score: state.score,
            session_best: state.session_best,
            obstacles: state.obstacles.len(),
            projectiles: state.projectiles.len(),
            draw_commands: list.commands.len(),
            texts: list.texts(),
            last_frame_head: &list.commands[..list.commands.len().min(8)],
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("failed to serialize summary: {}", e),
        }
    }
}
