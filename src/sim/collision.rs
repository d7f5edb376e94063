//! Axis-aligned collision detection
//!
//! The avatar and every obstacle bar are boxes; a hit is a strict overlap
//! (edges that merely touch do not collide). World bounds are inclusive:
//! touching the floor or the ceiling ends the run.

use glam::Vec2;

use super::state::{Avatar, Obstacle};
use crate::config::GameConfig;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// What the avatar ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Index into the obstacle sequence
    Obstacle(usize),
    Ceiling,
    Floor,
}

/// First collision found, checking obstacles in sequence order then bounds
pub fn detect(avatar: &Avatar, obstacles: &[Obstacle], config: &GameConfig) -> Option<Collision> {
    let body = avatar.bounds();
    let width = config.obstacle_width;

    let hit = obstacles.iter().position(|o| {
        body.overlaps(&o.top_bar(width))
            || body.overlaps(&o.bottom_bar(width, config.gap_height, config.world_height))
    });
    if let Some(index) = hit {
        return Some(Collision::Obstacle(index));
    }

    if body.max().y >= config.world_height {
        Some(Collision::Floor)
    } else if body.min.y <= 0.0 {
        Some(Collision::Ceiling)
    } else {
        None
    }
}

/// True if the avatar hit anything this tick
pub fn check(avatar: &Avatar, obstacles: &[Obstacle], config: &GameConfig) -> bool {
    detect(avatar, obstacles, config).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn avatar_at(config: &GameConfig, y: f32) -> Avatar {
        let mut avatar = Avatar::new(config);
        avatar.pos.y = y;
        avatar
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Rect::new(Vec2::splat(5.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_ceiling_hit_at_zero() {
        let config = GameConfig::default();
        let mut avatar = avatar_at(&config, 0.0);
        avatar.velocity = -1.0;
        assert_eq!(detect(&avatar, &[], &config), Some(Collision::Ceiling));
        avatar.velocity = 0.0;
        assert!(check(&avatar, &[], &config));
    }

    #[test]
    fn test_floor_hit_when_touching() {
        let config = GameConfig::default();
        let avatar = avatar_at(&config, config.world_height - config.avatar_size);
        assert_eq!(detect(&avatar, &[], &config), Some(Collision::Floor));

        let avatar = avatar_at(&config, config.world_height - config.avatar_size - 0.5);
        assert!(!check(&avatar, &[], &config));
    }

    #[test]
    fn test_through_gap_is_safe() {
        let config = GameConfig::default();
        // Gap spans 200..380; avatar box spans 250..290
        let obstacles = [Obstacle::new(70.0, 200.0)];
        let avatar = avatar_at(&config, 250.0);
        assert!(!check(&avatar, &obstacles, &config));
    }

    #[test]
    fn test_top_and_bottom_bar_hits() {
        let config = GameConfig::default();
        let obstacles = [Obstacle::new(300.0, 100.0), Obstacle::new(70.0, 260.0)];

        // Head above the gap of the second obstacle
        let avatar = avatar_at(&config, 250.0);
        assert_eq!(detect(&avatar, &obstacles, &config), Some(Collision::Obstacle(1)));

        // Feet below the gap (gap bottom at 440)
        let avatar = avatar_at(&config, 410.0);
        assert_eq!(detect(&avatar, &obstacles, &config), Some(Collision::Obstacle(1)));
    }

    #[test]
    fn test_obstacle_not_overlapping_horizontally() {
        let config = GameConfig::default();
        // Left edge exactly at the avatar's right edge (120): touching only
        let obstacles = [Obstacle::new(120.0, 400.0)];
        let avatar = avatar_at(&config, 250.0);
        assert!(!check(&avatar, &obstacles, &config));
    }

    proptest! {
        #[test]
        fn prop_collision_iff_overlap_or_out_of_bounds(
            y in -100.0f32..700.0,
            obstacle_x in -80.0f32..420.0,
            gap_top in 50.0f32..370.0,
        ) {
            let config = GameConfig::default();
            let avatar = avatar_at(&config, y);
            let obstacle = Obstacle::new(obstacle_x, gap_top);

            let (ax0, ax1) = (avatar.pos.x, avatar.pos.x + avatar.size);
            let (ay0, ay1) = (y, y + avatar.size);
            let (ox0, ox1) = (obstacle_x, obstacle_x + config.obstacle_width);
            let gap_bottom = gap_top + config.gap_height;

            let horizontal = ax0 < ox1 && ox0 < ax1;
            let hits_top = horizontal && ay0 < gap_top && 0.0 < ay1;
            let hits_bottom = horizontal && ay0 < config.world_height && gap_bottom < ay1;
            let out_of_bounds = ay1 >= config.world_height || ay0 <= 0.0;

            prop_assert_eq!(
                check(&avatar, &[obstacle], &config),
                hits_top || hits_bottom || out_of_bounds
            );
        }

        #[test]
        fn prop_inside_gap_and_bounds_never_collides(
            obstacle_x in -80.0f32..420.0,
            gap_top in 50.0f32..370.0,
            offset in 0.0f32..139.0,
        ) {
            let config = GameConfig::default();
            let avatar = avatar_at(&config, gap_top + offset);
            prop_assert!(!check(&avatar, &[Obstacle::new(obstacle_x, gap_top)], &config));
        }
    }
}
