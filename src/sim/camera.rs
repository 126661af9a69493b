//! Horizontal scroll camera

use crate::consts::*;

/// Derives a world-to-screen x offset from the player position, keeping
/// the player roughly centered and never showing past the level edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Recompute the offset for the given player center x.
    pub fn follow(&mut self, player_center_x: f32) {
        let target = player_center_x - VIEW_WIDTH / 2.0;
        self.offset = target.clamp(0.0, LEVEL_WIDTH - VIEW_WIDTH);
    }

    /// World x to screen x
    #[inline]
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_clamps_to_level_bounds() {
        let mut camera = Camera::default();

        camera.follow(0.0);
        assert_eq!(camera.offset, 0.0);

        camera.follow(LEVEL_WIDTH);
        assert_eq!(camera.offset, LEVEL_WIDTH - VIEW_WIDTH);
    }

    #[test]
    fn test_camera_centers_player_mid_level() {
        let mut camera = Camera::default();
        camera.follow(1200.0);
        assert_eq!(camera.offset, 1200.0 - VIEW_WIDTH / 2.0);
        assert_eq!(camera.to_screen_x(1200.0), VIEW_WIDTH / 2.0);
    }
}
