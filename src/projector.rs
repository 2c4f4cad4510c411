use crate::config::Config;
use crate::map::Grid;
use crate::paint::{Painter, Rgba};
use crate::player::Player;
use crate::ray::{Ray, PROBE_NUDGE};
use glam::Vec2;

// perpendicular distance under which slices are fully opaque
const SHADE_DISTANCE: f32 = 170.;
// brightness of horizontal-line hits relative to vertical ones
const HORIZONTAL_SHADE: f32 = 0.7;

const PALETTE: [Rgba; 4] = [
    Rgba::rgb(0xd0, 0x30, 0x30),
    Rgba::rgb(0x30, 0xb0, 0x40),
    Rgba::rgb(0x30, 0x50, 0xd0),
    Rgba::rgb(0xe0, 0xc0, 0x30),
];

/// base color for a wall material, transparent for anything unknown
pub fn material_color(material: u8) -> Rgba {
    match material {
        1..=4 => PALETTE[material as usize - 1],
        _ => Rgba::TRANSPARENT,
    }
}

/// Material of the wall a ray hit. The hit point sits on a grid line, so
/// sample one unit further along the ray to land inside the wall cell rather
/// than the open cell in front of it.
pub fn material_of(grid: &Grid, ray: &Ray) -> u8 {
    let bias = |positive: bool| if positive { PROBE_NUDGE } else { -PROBE_NUDGE };
    let sample = if ray.was_hit_vertical {
        ray.hit + Vec2::new(bias(ray.facing.right), 0.)
    } else {
        ray.hit + Vec2::new(0., bias(ray.facing.down))
    };
    grid.material_at(sample.x, sample.y)
}

/// One projected vertical strip of wall.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WallSlice {
    pub column: usize,
    /// left edge in screen pixels
    pub x: f32,
    pub width: f32,
    /// full projected height, may exceed the viewport
    pub wall_height: f32,
    pub perpendicular_distance: f32,
    pub material: u8,
    pub color: Rgba,
}

/// Maps ray hits onto the screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projection {
    /// distance from the eye to the projection plane, in pixels
    pub plane_distance: f32,
    pub strip_width: f32,
    pub screen_height: f32,
    pub tile_size: f32,
}

impl Projection {
    pub fn new(config: &Config, grid: &Grid) -> Self {
        Self {
            plane_distance: (config.screen_width / 2.) / (config.fov / 2.).tan(),
            strip_width: config.strip_width,
            screen_height: config.screen_height,
            tile_size: grid.tile_size(),
        }
    }

    /// distance measured along the view direction, which removes fisheye
    pub fn perpendicular_distance(ray: &Ray, heading: f32) -> f32 {
        ray.distance * (ray.angle - heading).cos()
    }

    pub fn wall_height(&self, perpendicular_distance: f32) -> f32 {
        (self.tile_size / perpendicular_distance) * self.plane_distance
    }

    pub fn project(&self, grid: &Grid, ray: &Ray, column: usize, heading: f32) -> WallSlice {
        let perpendicular_distance = Self::perpendicular_distance(ray, heading);
        let material = material_of(grid, ray);

        let base = material_color(material);
        let color = if base.a == 0 {
            base
        } else {
            let alpha = (SHADE_DISTANCE / perpendicular_distance).clamp(0., 1.);
            let brightness = if ray.was_hit_vertical {
                1.
            } else {
                HORIZONTAL_SHADE
            };
            base.scaled(brightness)
                .with_alpha((alpha * 255.).round() as u8)
        };

        WallSlice {
            column,
            x: column as f32 * self.strip_width,
            width: self.strip_width,
            wall_height: self.wall_height(perpendicular_distance),
            perpendicular_distance,
            material,
            color,
        }
    }

    /// project every ray, keeping column order
    pub fn project_all(&self, grid: &Grid, player: &Player, rays: &[Ray]) -> Vec<WallSlice> {
        rays.iter()
            .enumerate()
            .map(|(column, ray)| self.project(grid, ray, column, player.heading))
            .collect()
    }

    /// draw slices vertically centered in the viewport, clipped to it
    pub fn render(&self, painter: &mut impl Painter, slices: &[WallSlice]) -> anyhow::Result<()> {
        for slice in slices.iter().filter(|slice| slice.color.a != 0) {
            let height = slice.wall_height.min(self.screen_height);
            painter.fill_rect(
                Vec2::new(slice.x, (self.screen_height - height) / 2.),
                Vec2::new(slice.width, height),
                slice.color,
            )?;
        }

        Ok(())
    }
}
