use crate::config::Config;
use crate::map::Grid;
use crate::paint::{Painter, Rgba};
use crate::player::Player;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// rays closer than this (in sine/cosine) to a line family never cross it
const PARALLEL_EPSILON: f32 = 1e-6;

/// how far past a grid line a probe looks when travelling in the negative
/// direction, so it samples the cell behind the line
pub(crate) const PROBE_NUDGE: f32 = 1.;

const RAY_COLOR: Rgba = Rgba::new(0xff, 0, 0, 0x4c);

/// wrap an angle into [0, 2π)
pub fn normalize_angle(angle: f32) -> f32 {
    let angle = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if angle >= TAU {
        0.
    } else {
        angle
    }
}

/// quadrant of a ray, y grows downward on screen
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Facing {
    pub down: bool,
    pub right: bool,
}

impl Facing {
    /// `angle` must already be normalized
    pub fn of(angle: f32) -> Self {
        Self {
            down: angle > 0. && angle < PI,
            right: !(FRAC_PI_2..=3. * FRAC_PI_2).contains(&angle),
        }
    }

    pub fn up(self) -> bool {
        !self.down
    }

    pub fn left(self) -> bool {
        !self.right
    }
}

/// family of grid lines a search crosses
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Lines {
    /// y = k * tile size
    Horizontal,
    /// x = k * tile size
    Vertical,
}

impl Lines {
    /// Map a world vector into (across, along) coordinates, where `across`
    /// is the axis that crosses this line family. The swap is its own inverse.
    fn orient(self, v: Vec2) -> Vec2 {
        match self {
            Lines::Horizontal => Vec2::new(v.y, v.x),
            Lines::Vertical => v,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Candidate {
    pub point: Vec2,
    pub distance: f32,
}

/// A single cast ray and the wall it hit.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray {
    /// normalized angle in [0, 2π)
    pub angle: f32,
    pub facing: Facing,
    pub hit: Vec2,
    /// euclidean distance from the player, not fisheye corrected
    pub distance: f32,
    /// hit landed on a vertical grid line (x = k * tile size)
    pub was_hit_vertical: bool,
}

/// Walk from `origin` across one family of grid lines until a probe lands in
/// a blocked cell. Returns `None` when the ray runs parallel to the family.
///
/// Out-of-bounds probes count as blocked, so this always stops once the ray
/// leaves the grid.
pub(crate) fn search(
    grid: &Grid,
    origin: Vec2,
    angle: f32,
    facing: Facing,
    lines: Lines,
) -> Option<Candidate> {
    let (forward, sideways) = match lines {
        Lines::Horizontal => (facing.down, facing.right),
        Lines::Vertical => (facing.right, facing.down),
    };
    let start = lines.orient(origin);
    let dir = lines.orient(Vec2::from_angle(angle));
    if dir.x.abs() < PARALLEL_EPSILON {
        return None;
    }

    let size = grid.tile_size();
    let slope = dir.y / dir.x;

    // first line in the direction of travel
    let across = (start.x / size).floor() * size + if forward { size } else { 0. };
    let mut point = Vec2::new(across, start.y + (across - start.x) * slope);

    let step = Vec2::new(
        if forward { size } else { -size },
        (size * slope).abs() * if sideways { 1. } else { -1. },
    );
    let nudge = Vec2::new(if forward { 0. } else { -PROBE_NUDGE }, 0.);

    loop {
        let probe = lines.orient(point + nudge);
        if grid.is_blocked(probe.x, probe.y, 0.) {
            let hit = lines.orient(point);
            return Some(Candidate {
                point: hit,
                distance: origin.distance(hit),
            });
        }
        point += step;
    }
}

/// Pick the closer of the two candidates. Equal distances go to the vertical
/// hit. The flag in the result is `true` when the vertical hit won.
pub(crate) fn nearest(
    horizontal: Option<Candidate>,
    vertical: Option<Candidate>,
) -> (Candidate, bool) {
    match (horizontal, vertical) {
        (Some(h), Some(v)) => {
            if v.distance <= h.distance {
                (v, true)
            } else {
                (h, false)
            }
        }
        (Some(h), None) => (h, false),
        (None, Some(v)) => (v, true),
        // a ray cannot be parallel to both families
        (None, None) => (
            Candidate {
                point: Vec2::INFINITY,
                distance: f32::INFINITY,
            },
            true,
        ),
    }
}

impl Ray {
    /// cast a single ray from the player's position
    pub fn cast(grid: &Grid, origin: Vec2, angle: f32) -> Self {
        let angle = normalize_angle(angle);
        let facing = Facing::of(angle);

        let (hit, was_hit_vertical) = nearest(
            search(grid, origin, angle, facing, Lines::Horizontal),
            search(grid, origin, angle, facing, Lines::Vertical),
        );

        Self {
            angle,
            facing,
            hit: hit.point,
            distance: hit.distance,
            was_hit_vertical,
        }
    }
}

/// angle of the ray for a screen column, swept left to right across the fov
pub fn column_angle(heading: f32, config: &Config, column: usize) -> f32 {
    let delta = config.fov / config.num_rays() as f32;
    normalize_angle(heading - config.fov / 2. + column as f32 * delta)
}

/// Cast one ray per screen column, ordered left to right.
pub fn cast_all(grid: &Grid, player: &Player, config: &Config) -> Vec<Ray> {
    let rays = (0..config.num_rays())
        .map(|column| Ray::cast(grid, player.pos, column_angle(player.heading, config, column)))
        .collect::<Vec<_>>();

    log::trace!(
        "cast {} rays, {} vertical hits",
        rays.len(),
        rays.iter().filter(|ray| ray.was_hit_vertical).count()
    );
    rays
}

/// draw each ray on the minimap as a line from the player to its hit
pub fn render(
    painter: &mut impl Painter,
    player: &Player,
    rays: &[Ray],
    scale: f32,
) -> anyhow::Result<()> {
    for ray in rays.iter().filter(|ray| ray.distance.is_finite()) {
        painter.line(player.pos * scale, ray.hit * scale, RAY_COLOR)?;
    }

    Ok(())
}
