use crate::config::Config;
use crate::map::Grid;
use crate::paint::{Painter, Rgba};
use crate::ray::normalize_angle;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

// length of the heading marker on the minimap, in world units
const HEADING_MARKER: f32 = 32.;

/// requested rotation for the next update
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Turn {
    Left,
    #[default]
    None,
    Right,
}

impl Turn {
    fn factor(self) -> f32 {
        match self {
            Turn::Left => -1.,
            Turn::None => 0.,
            Turn::Right => 1.,
        }
    }
}

/// requested movement along the heading for the next update
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Walk {
    Back,
    #[default]
    Stay,
    Forward,
}

impl Walk {
    fn factor(self) -> f32 {
        match self {
            Walk::Back => -1.,
            Walk::Stay => 0.,
            Walk::Forward => 1.,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// radians, 0 along +x and growing clockwise on screen
    pub heading: f32,
    pub speed: f32,
    pub turn_speed: f32,
    pub turn: Turn,
    pub walk: Walk,
}

impl Player {
    /// player standing in the middle of the map, facing down
    pub fn spawn(grid: &Grid, config: &Config) -> Self {
        let pos = Vec2::new(grid.width(), grid.height()) / 2.;
        log::debug!("spawning player at {pos}");

        Self {
            pos,
            radius: config.player_radius,
            heading: FRAC_PI_2,
            speed: config.move_speed,
            turn_speed: config.turn_speed,
            turn: Turn::None,
            walk: Walk::Stay,
        }
    }

    /// Apply the current intents for one frame.
    ///
    /// The step is checked against the grid one axis at a time, so a blocked
    /// axis does not cancel movement along the other one and the player slides
    /// along walls.
    pub fn update(&mut self, grid: &Grid) {
        if self.turn != Turn::None {
            self.heading = normalize_angle(self.heading + self.turn.factor() * self.turn_speed);
        }

        let step = Vec2::from_angle(self.heading) * self.walk.factor() * self.speed;
        if step == Vec2::ZERO {
            return;
        }

        if !grid.is_blocked(self.pos.x + step.x, self.pos.y, self.radius) {
            self.pos.x += step.x;
        }

        if !grid.is_blocked(self.pos.x, self.pos.y + step.y, self.radius) {
            self.pos.y += step.y;
        }
    }

    pub fn render(&self, painter: &mut impl Painter, scale: f32) -> anyhow::Result<()> {
        let center = self.pos * scale;
        painter.line(
            center,
            (self.pos + Vec2::from_angle(self.heading) * HEADING_MARKER) * scale,
            Rgba::rgb(0, 0, 0xff),
        )?;
        painter.fill_circle(center, self.radius * scale, Rgba::rgb(0xff, 0, 0))?;

        Ok(())
    }
}
