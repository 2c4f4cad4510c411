use crate::map::Grid;

// world units per tile in the built-in level
pub const TILE_SIZE: f32 = 64.;

const FOV_DEGREES: f32 = 60.;
const TURN_DEGREES_PER_FRAME: f32 = 2.;

/// Tunable constants for a session.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    /// field of view in radians
    pub fov: f32,
    /// width in pixels of one projected wall slice
    pub strip_width: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    /// world units per frame
    pub move_speed: f32,
    /// radians per frame
    pub turn_speed: f32,
    pub player_radius: f32,
    pub minimap_scale: f32,
    pub target_fps: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fov: FOV_DEGREES.to_radians(),
            strip_width: 1.,
            screen_width: 15. * TILE_SIZE,
            screen_height: 11. * TILE_SIZE,
            move_speed: 2.,
            turn_speed: TURN_DEGREES_PER_FRAME.to_radians(),
            player_radius: 4.,
            minimap_scale: 0.2,
            target_fps: 30,
        }
    }
}

impl Config {
    /// default settings with the window sized to cover the whole grid
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            screen_width: grid.width(),
            screen_height: grid.height(),
            ..Self::default()
        }
    }

    /// number of rays cast per frame, one per strip
    pub fn num_rays(&self) -> usize {
        (self.screen_width / self.strip_width) as usize
    }
}
