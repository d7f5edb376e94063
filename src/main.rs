//! Flappy Gates entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_gates::audio::AudioManager;
    use flappy_gates::persistence::LocalStore;
    use flappy_gates::platform::hud::Hud;
    use flappy_gates::platform::{InputAdapter, InputEvent};
    use flappy_gates::renderer::{RenderState, ScenePresenter};
    use flappy_gates::{Game, GameConfig, Settings};

    type BrowserGame = Game<ScenePresenter, AudioManager, LocalStore>;

    /// Everything the event closures share
    struct App {
        game: BrowserGame,
        input: InputAdapter,
        settings: Settings,
    }

    impl App {
        fn handle_input(&mut self, event: InputEvent<'_>, raw: &web_sys::Event) {
            let decision = self.input.handle(event, raw.time_stamp());
            if decision.prevent_default {
                raw.prevent_default();
            }
            if decision.activate {
                // Audio may only start inside a user gesture
                self.game.audio().resume();
                self.game.activate_intent();
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.game.audio_mut().set_muted(self.settings.muted);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    /// Resize the canvas backing store to its CSS size times the pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Flappy Gates starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let (width, height) = fit_canvas(&canvas);

        let config = GameConfig::default();

        // WebGPU where available, WebGL2 otherwise
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.world_width, config.world_height),
        )
        .await
        .map_err(|e| JsValue::from_str(&format!("Failed to create device: {e}")))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            config.clone(),
            seed,
            ScenePresenter::new(render_state, Hud::new(), config),
            AudioManager::new(&settings),
            LocalStore::new(),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            input: InputAdapter::new(),
            settings,
        }));

        setup_input_handlers(&canvas, app.clone())?;
        setup_resize(canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Flappy Gates running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Mouse press
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let input = InputEvent::PointerDown {
                    button: event.button(),
                };
                app.borrow_mut().handle_input(input, &event);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start; must be non-passive so preventDefault stops the ghost click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                app.borrow_mut().handle_input(InputEvent::TouchStart, &event);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                let code = event.code();
                if code == "KeyM" && !event.repeat() {
                    app.toggle_mute();
                    return;
                }
                let input = InputEvent::KeyDown {
                    code: &code,
                    repeat: event.repeat(),
                };
                app.handle_input(input, &event);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = fit_canvas(&canvas);
            app.borrow_mut().game.presenter_mut().resize(w, h);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().game.on_tick(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use flappy_gates::audio::SilentAudio;
    use flappy_gates::persistence::MemoryStore;
    use flappy_gates::presenter::LogPresenter;
    use flappy_gates::sim::{GamePhase, autopilot};
    use flappy_gates::{Game, GameConfig};

    /// Headless run: the autopilot plays a fixed number of 60 Hz frames
    #[derive(Parser, Debug)]
    #[command(name = "flappy-gates")]
    #[command(about = "Play Flappy Gates headless with the autopilot")]
    pub struct Args {
        /// JSON file overriding world constants (missing keys keep defaults)
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,

        /// Animation frames to simulate
        #[arg(long, default_value_t = 60 * 60)]
        pub frames: u64,

        /// Obstacle RNG seed; defaults to the current time
        #[arg(long)]
        pub seed: Option<u64>,
    }

    fn load_config(path: &Path) -> Result<GameConfig, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        GameConfig::from_json(&json).map_err(|e| format!("bad config {}: {}", path.display(), e))
    }

    pub fn run(args: Args) -> Result<(), String> {
        let config = match &args.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_millis() as u64)
        });

        let frame_ms = config.reference_frame_ms;
        let mut game = Game::new(config, seed, LogPresenter::new(), SilentAudio, MemoryStore::new());
        let mut sessions = 0u32;

        for i in 0..args.frames {
            let state = game.state();
            let wants = match state.phase {
                GamePhase::Idle | GamePhase::Playing => autopilot::wants_activation(state),
                GamePhase::GameOver => !state.input_locked,
            };
            if wants {
                if state.phase == GamePhase::Idle {
                    sessions += 1;
                }
                game.activate_intent();
            }
            game.on_tick(i as f64 * frame_ms);
        }

        let board = &game.state().scoreboard;
        log::info!(
            "Done: {} frames, {} sessions, last score {}, best {} (seed {})",
            game.presenter().frames(),
            sessions,
            board.score,
            board.best,
            seed
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::CommandFactory;

        #[test]
        fn test_cli_definition() {
            Args::command().debug_assert();
        }

        #[test]
        fn test_named_flags() {
            let args = Args::try_parse_from([
                "flappy-gates",
                "--config",
                "world.json",
                "--frames",
                "600",
                "--seed",
                "42",
            ])
            .unwrap();
            assert_eq!(args.config, Some(PathBuf::from("world.json")));
            assert_eq!(args.frames, 600);
            assert_eq!(args.seed, Some(42));

            let defaults = Args::try_parse_from(["flappy-gates"]).unwrap();
            assert_eq!(defaults.frames, 3600);
            assert_eq!(defaults.seed, None);
        }

        #[test]
        fn test_bad_frame_count_rejected() {
            assert!(Args::try_parse_from(["flappy-gates", "--frames", "10k"]).is_err());
        }

        #[test]
        fn test_missing_config_is_an_error() {
            let args = Args::try_parse_from([
                "flappy-gates",
                "--config",
                "/nonexistent/flappy-gates.json",
            ])
            .unwrap();
            assert!(run(args).is_err());
        }

        #[test]
        fn test_seeded_run_completes() {
            let args = Args::try_parse_from(["flappy-gates", "--frames", "300", "--seed", "7"]).unwrap();
            assert!(run(args).is_ok());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Gates (native, headless) starting...");

    if let Err(e) = native::run(native::Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
