//! The scrolling platform field
//!
//! Platforms are kept in creation order: front = oldest/bottom-most. The
//! field slides down while the player ascends and recycles platforms that
//! leave the bottom edge into fresh ones at the top, preserving the count.
//! Randomly placed platforms may overlap each other; that is tolerated.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::tuning::Tuning;

/// A single platform (top-left corner; size is shared via [`Tuning`])
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
}

impl Platform {
    /// Bounding box for collision tests and drawing
    pub fn rect(&self, size: Vec2) -> Rect {
        Rect {
            pos: self.pos,
            size,
        }
    }
}

/// Ordered collection of platforms (front = bottom-most)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformField {
    platforms: Vec<Platform>,
}

impl PlatformField {
    /// Place the starting layout: the fixed base platform plus
    /// `starting_rows` randomized rows stacked above it.
    pub fn place(rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let mut platforms = Vec::with_capacity(tuning.starting_rows + 1);

        platforms.push(Platform {
            pos: tuning.base_platform_pos(),
        });

        for row in 0..tuning.starting_rows {
            let y = tuning.board.y - tuning.row_spacing * row as f32 - tuning.first_row_offset;
            platforms.push(Platform {
                pos: Vec2::new(random_x(rng, tuning), y),
            });
        }

        Self { platforms }
    }

    /// Move every platform down by `amount` pixels
    pub fn scroll_down(&mut self, amount: f32) {
        for platform in &mut self.platforms {
            platform.pos.y += amount;
        }
    }

    /// Drop platforms that scrolled past the bottom edge and spawn a fresh
    /// one at the top for each, keeping the count unchanged. Returns how
    /// many were recycled.
    pub fn recycle(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> usize {
        let mut recycled = 0;
        while self
            .platforms
            .first()
            .is_some_and(|p| p.pos.y >= tuning.board.y)
        {
            self.platforms.remove(0);
            self.platforms.push(Platform {
                pos: Vec2::new(random_x(rng, tuning), -tuning.platform_size.y),
            });
            recycled += 1;
        }
        recycled
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Uniform horizontal placement in `[0, 3/4 * width)`, floored to whole
/// pixels
fn random_x(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    rng.random_range(0.0..tuning.spawn_band()).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_starting_layout() {
        let tuning = Tuning::default();
        let field = PlatformField::place(&mut rng(7), &tuning);

        assert_eq!(field.len(), tuning.starting_rows + 1);

        // Fixed base platform at the canonical bottom position
        let base = field.platforms[0];
        assert_eq!(base.pos, tuning.base_platform_pos());

        // Randomized rows at fixed vertical spacing, x inside the band
        for (row, platform) in field.iter().skip(1).enumerate() {
            let expected_y =
                tuning.board.y - tuning.row_spacing * row as f32 - tuning.first_row_offset;
            assert_eq!(platform.pos.y, expected_y);
            assert!(platform.pos.x >= 0.0);
            assert!(platform.pos.x < tuning.spawn_band());
            assert_eq!(platform.pos.x, platform.pos.x.floor());
        }
    }

    #[test]
    fn test_scroll_moves_every_platform() {
        let tuning = Tuning::default();
        let mut field = PlatformField::place(&mut rng(7), &tuning);
        let before: Vec<f32> = field.iter().map(|p| p.pos.y).collect();

        field.scroll_down(8.0);

        for (platform, y) in field.iter().zip(before) {
            assert_eq!(platform.pos.y, y + 8.0);
        }
    }

    #[test]
    fn test_recycle_preserves_count() {
        let tuning = Tuning::default();
        let mut r = rng(7);
        let mut field = PlatformField::place(&mut r, &tuning);

        // Nothing below the bottom edge yet
        assert_eq!(field.recycle(&mut r, &tuning), 0);
        assert_eq!(field.len(), 7);

        // Push the bottom-most platform past the edge
        field.platforms[0].pos.y = tuning.board.y;
        assert_eq!(field.recycle(&mut r, &tuning), 1);
        assert_eq!(field.len(), 7);

        // The replacement spawned just above the top edge
        let fresh = *field.platforms.last().unwrap();
        assert_eq!(fresh.pos.y, -tuning.platform_size.y);
        assert!(fresh.pos.x >= 0.0 && fresh.pos.x < tuning.spawn_band());
    }

    #[test]
    fn test_recycle_handles_multiple_per_tick() {
        let tuning = Tuning::default();
        let mut r = rng(11);
        let mut field = PlatformField::place(&mut r, &tuning);

        field.platforms[0].pos.y = tuning.board.y + 20.0;
        field.platforms[1].pos.y = tuning.board.y + 5.0;

        assert_eq!(field.recycle(&mut r, &tuning), 2);
        assert_eq!(field.len(), 7);
        assert!(field.iter().all(|p| p.pos.y < tuning.board.y));
    }
}
