//! WebGPU rendering module
//!
//! The scene is a list of flat-colored quads in world coordinates, mapped to
//! the canvas with letterboxing so the world keeps its aspect ratio.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

#[cfg(target_arch = "wasm32")]
pub use scene::ScenePresenter;

/// Map a world point (origin top-left, y down) to normalized device
/// coordinates, letterboxing whichever axis has spare room
pub fn world_to_ndc(x: f32, y: f32, world: (f32, f32), viewport: (u32, u32)) -> (f32, f32) {
    let (ww, wh) = world;
    let (vw, vh) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
    let world_aspect = ww / wh;
    let view_aspect = vw / vh;

    let (sx, sy) = if view_aspect > world_aspect {
        (world_aspect / view_aspect, 1.0)
    } else {
        (1.0, view_aspect / world_aspect)
    };

    let nx = (x / ww) * 2.0 - 1.0;
    let ny = 1.0 - (y / wh) * 2.0;
    (nx * sx, ny * sy)
}

#[cfg(target_arch = "wasm32")]
mod scene {
    use super::{RenderState, Vertex, shapes};
    use crate::config::GameConfig;
    use crate::platform::hud::{Hud, HudView};
    use crate::presenter::Presenter;
    use crate::sim::{Avatar, Obstacle};

    /// Browser presenter: GPU scene plus DOM text overlay
    pub struct ScenePresenter {
        render_state: RenderState,
        hud: Hud,
        config: GameConfig,
        /// Last gameplay frame, redrawn under the game-over tint
        last_scene: Vec<Vertex>,
    }

    impl ScenePresenter {
        pub fn new(render_state: RenderState, hud: Hud, config: GameConfig) -> Self {
            Self {
                render_state,
                hud,
                config,
                last_scene: Vec::new(),
            }
        }

        pub fn resize(&mut self, width: u32, height: u32) {
            self.render_state.resize(width, height);
        }

        fn submit(&mut self, vertices: &[Vertex]) {
            match self.render_state.render(vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    impl Presenter for ScenePresenter {
        fn draw_idle(&mut self, best_score: u32) {
            let scene = shapes::idle_scene(&self.config);
            self.submit(&scene);
            self.hud.show(HudView::Title { best: best_score });
        }

        fn draw_playing(&mut self, avatar: &Avatar, obstacles: &[Obstacle], score: u32) {
            let scene = shapes::playing_scene(avatar, obstacles, &self.config);
            self.submit(&scene);
            self.last_scene = scene;
            self.hud.show(HudView::Playing { score });
        }

        fn draw_game_over(&mut self, final_score: u32, best_score: u32, waiting: bool) {
            let mut scene = self.last_scene.clone();
            shapes::tint(&mut scene, &self.config);
            self.submit(&scene);
            self.hud.show(HudView::GameOver {
                score: final_score,
                best: best_score,
                waiting,
            });
        }
    }
}
