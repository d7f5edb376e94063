//! Scene geometry in world coordinates
//!
//! Everything is axis-aligned quads. Y grows downward like the simulation;
//! [`super::world_to_ndc`] flips it for the GPU.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::config::GameConfig;
use crate::sim::collision::Rect;
use crate::sim::{Avatar, Obstacle};

/// Lip overhang on each side of a bar's open end
const LIP_OVERHANG: f32 = 4.0;
const LIP_HEIGHT: f32 = 16.0;

/// Append two triangles covering `min..min + size`
pub fn quad(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]);
}

pub fn rect(out: &mut Vec<Vertex>, rect: Rect, color: [f32; 4]) {
    quad(out, rect.min, rect.size, color);
}

pub fn sky(out: &mut Vec<Vertex>, config: &GameConfig) {
    quad(
        out,
        Vec2::ZERO,
        Vec2::new(config.world_width, config.world_height),
        colors::SKY,
    );
}

pub fn avatar(out: &mut Vec<Vertex>, avatar: &Avatar) {
    rect(out, avatar.bounds(), colors::AVATAR);

    let eye = avatar.size * 0.2;
    let eye_pos = avatar.pos + Vec2::new(avatar.size * 0.6, avatar.size * 0.2);
    quad(out, eye_pos, Vec2::splat(eye), colors::AVATAR_EYE);
}

pub fn obstacle(out: &mut Vec<Vertex>, obstacle: &Obstacle, config: &GameConfig) {
    let width = config.obstacle_width;
    let top = obstacle.top_bar(width);
    let bottom = obstacle.bottom_bar(width, config.gap_height, config.world_height);
    rect(out, top, colors::OBSTACLE);
    rect(out, bottom, colors::OBSTACLE);

    // Lips sit at the gap edges, drawn only, never collided with
    let lip_size = Vec2::new(width + LIP_OVERHANG * 2.0, LIP_HEIGHT);
    let lip_x = obstacle.x - LIP_OVERHANG;
    if top.size.y > 0.0 {
        let y = (top.max().y - LIP_HEIGHT).max(0.0);
        quad(out, Vec2::new(lip_x, y), lip_size, colors::OBSTACLE_LIP);
    }
    if bottom.size.y > 0.0 {
        quad(out, Vec2::new(lip_x, bottom.min.y), lip_size, colors::OBSTACLE_LIP);
    }
}

/// Full gameplay frame
pub fn playing_scene(avatar_state: &Avatar, obstacles: &[Obstacle], config: &GameConfig) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * (2 + 4 * obstacles.len() + 2));
    sky(&mut out, config);
    for o in obstacles {
        obstacle(&mut out, o, config);
    }
    avatar(&mut out, avatar_state);
    out
}

/// Title frame: the avatar waiting at its start position
pub fn idle_scene(config: &GameConfig) -> Vec<Vertex> {
    playing_scene(&Avatar::new(config), &[], config)
}

/// Darken a finished frame
pub fn tint(out: &mut Vec<Vertex>, config: &GameConfig) {
    quad(
        out,
        Vec2::ZERO,
        Vec2::new(config.world_width, config.world_height),
        colors::GAME_OVER_TINT,
    );
}
