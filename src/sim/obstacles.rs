//! Obstacle spawning, scrolling and recycling

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::config::GameConfig;

/// Ordered obstacle sequence (spawn order = render order)
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Normalized ticks since the last spawn
    spawn_timer: f32,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Drop all obstacles and restart the spawn timer
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Append an obstacle at the right edge of the world with a random gap
    pub fn spawn(&mut self, config: &GameConfig) {
        let (min, max) = config.gap_top_range();
        let gap_top = if max > min {
            self.rng.random_range(min..=max)
        } else {
            min
        };
        self.obstacles.push(Obstacle::new(config.world_width, gap_top));
    }

    /// Advance the field by `scale` reference frames.
    ///
    /// The spawn timer resets to zero on spawn (any overshoot is dropped), so
    /// at scale 1 spawns land exactly on multiples of the interval.
    /// Returns how many obstacles the avatar cleared this tick; `avatar_rear`
    /// is the avatar's left edge, so a point needs the whole body past the gate.
    pub fn tick(&mut self, scale: f32, avatar_rear: f32, config: &GameConfig) -> u32 {
        self.spawn_timer += scale;
        if self.spawn_timer >= config.spawn_interval {
            self.spawn(config);
            self.spawn_timer = 0.0;
        }

        let dx = config.obstacle_speed * scale;
        for obstacle in &mut self.obstacles {
            obstacle.x -= dx;
        }

        let width = config.obstacle_width;
        self.obstacles.retain(|o| o.trailing_edge(width) >= 0.0);

        let mut scored = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if avatar_rear > obstacle.trailing_edge(width) {
                obstacle.passed = true;
                scored += 1;
            }
        }
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Avatar far to the left so nothing is ever passed
    const NO_AVATAR: f32 = -1000.0;

    #[test]
    fn test_spawn_cadence() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(42);

        for _ in 0..99 {
            field.tick(1.0, NO_AVATAR, &config);
        }
        assert!(field.obstacles().is_empty());

        field.tick(1.0, NO_AVATAR, &config);
        assert_eq!(field.obstacles().len(), 1);

        for _ in 0..99 {
            field.tick(1.0, NO_AVATAR, &config);
        }
        assert_eq!(field.obstacles().len(), 1);

        field.tick(1.0, NO_AVATAR, &config);
        assert_eq!(field.obstacles().len(), 2);
        // Spawn order is preserved and positions never coincide
        assert!(field.obstacles()[0].x < field.obstacles()[1].x);
    }

    #[test]
    fn test_spawn_at_right_edge_then_scroll() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(7);
        field.spawn(&config);
        assert_eq!(field.obstacles()[0].x, config.world_width);

        field.tick(2.0, NO_AVATAR, &config);
        assert!((field.obstacles()[0].x - (config.world_width - 5.0)).abs() < 0.0001);
    }

    #[test]
    fn test_gap_within_margins() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(123);
        for _ in 0..500 {
            field.spawn(&config);
        }
        for obstacle in field.obstacles() {
            assert!(obstacle.gap_top >= config.gap_margin_top);
            assert!(
                obstacle.gap_top + config.gap_height
                    <= config.world_height - config.gap_margin_bottom
            );
        }
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let config = GameConfig::default();
        let mut a = ObstacleField::new(99);
        let mut b = ObstacleField::new(99);
        for _ in 0..10 {
            a.spawn(&config);
            b.spawn(&config);
        }
        assert_eq!(a.obstacles(), b.obstacles());
    }

    #[test]
    fn test_offscreen_obstacles_removed() {
        let config = GameConfig {
            spawn_interval: 10_000.0,
            ..Default::default()
        };
        let mut field = ObstacleField::new(1);
        field.spawn(&config);
        // 400 + 60 = 460 units to scroll fully off at 2.5 per tick
        for _ in 0..184 {
            field.tick(1.0, NO_AVATAR, &config);
        }
        assert_eq!(field.obstacles().len(), 1);
        field.tick(1.0, NO_AVATAR, &config);
        assert!(field.obstacles().is_empty());
    }

    #[test]
    fn test_passed_once_at_trailing_edge() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(5);
        field.spawn(&config);
        let rear = config.avatar_x;

        let mut scored_total = 0;
        let mut scored_at = None;
        for tick in 0..170 {
            let scored = field.tick(1.0, rear, &config);
            if let Some(obstacle) = field.obstacles().first() {
                let cleared = rear > obstacle.trailing_edge(config.obstacle_width);
                assert_eq!(obstacle.passed, cleared);
            }
            if scored > 0 {
                scored_at.get_or_insert(tick);
            }
            scored_total += scored;
        }
        assert_eq!(scored_total, 1);
        // Trailing edge starts at 460 and must fall below 80: (460 - 80) / 2.5 = 152 moves,
        // so the 153rd tick (index 152) scores
        assert_eq!(scored_at, Some(152));
    }

    #[test]
    fn test_clear_resets_timer() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(3);
        for _ in 0..150 {
            field.tick(1.0, NO_AVATAR, &config);
        }
        field.clear();
        assert!(field.obstacles().is_empty());
        assert_eq!(field.spawn_timer(), 0.0);
    }
}
