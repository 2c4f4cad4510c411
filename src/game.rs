use raycaster::ray::{self, Ray};
use raycaster::{cast_all, Config, Grid, Player, Projection, Turn, Walk};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub(crate) struct Game {
    grid: Grid,
    player: Player,
    config: Config,
    projection: Projection,
    rays: Vec<Ray>,
    pub minimap: bool,
    pub canvas: Canvas<Window>,
}

impl Game {
    /// initialize game
    pub fn new(canvas: Canvas<Window>, grid: Grid, config: Config) -> Self {
        let player = Player::spawn(&grid, &config);
        let projection = Projection::new(&config, &grid);
        log::debug!(
            "projection plane at {:.1}px, {} rays per frame",
            projection.plane_distance,
            config.num_rays()
        );

        Self {
            rays: Vec::with_capacity(config.num_rays()),
            grid,
            player,
            config,
            projection,
            minimap: true,
            canvas,
        }
    }

    /// handle a fresh key press
    pub fn key_down(&mut self, key: Keycode) {
        match key {
            Keycode::Up => self.player.walk = Walk::Forward,
            Keycode::Down => self.player.walk = Walk::Back,
            Keycode::Right => self.player.turn = Turn::Right,
            Keycode::Left => self.player.turn = Turn::Left,
            // minimap toggle
            Keycode::M => self.minimap = !self.minimap,
            _ => {}
        }
    }

    /// handle a key release
    pub fn key_up(&mut self, key: Keycode) {
        match key {
            Keycode::Up | Keycode::Down => self.player.walk = Walk::Stay,
            Keycode::Left | Keycode::Right => self.player.turn = Turn::None,
            _ => {}
        }
    }

    /// advance one frame: move, then recast every column
    pub fn update(&mut self) {
        self.player.update(&self.grid);
        self.rays = cast_all(&self.grid, &self.player, &self.config);
    }

    pub fn draw(&mut self) -> anyhow::Result<()> {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        // DRAW WALLS
        let slices = self
            .projection
            .project_all(&self.grid, &self.player, &self.rays);
        self.projection.render(&mut self.canvas, &slices)?;

        // DRAW MINIMAP
        if self.minimap {
            let scale = self.config.minimap_scale;
            self.grid.render(&mut self.canvas, scale)?;
            ray::render(&mut self.canvas, &self.player, &self.rays, scale)?;
            self.player.render(&mut self.canvas, scale)?;
        }

        Ok(())
    }
}
