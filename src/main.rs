use game::Game;
use raycaster::sdl::StringToAnyhow;
use raycaster::{Config, Grid};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::time::{Duration, Instant};

mod game;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("RAYCASTER_LOG");

    log::info!("loading level");
    let grid = Grid::builtin()?;
    let config = Config::for_grid(&grid);

    // sdl boilerplate
    log::info!("initializing sdl2");
    let sdl_ctx = sdl2::init().ah()?;
    log::info!("initializing video");
    let video = sdl_ctx.video().ah()?;

    log::info!("initializing window");
    let width = config.screen_width as u32;
    let height = config.screen_height as u32;
    let mut window = video
        .window("raycaster", width, height)
        .position_centered()
        .build()?;
    window.set_resizable(false);
    window.set_maximum_size(width, height)?;
    window.set_minimum_size(width, height)?;

    log::info!("creating canvas");
    let canvas = window.into_canvas().build()?;
    log::info!("pumping events");
    let mut events = sdl_ctx.event_pump().ah()?;

    log::info!("initializing game state");
    let mut game = Game::new(canvas, grid, config);

    let delta = Duration::from_millis(1_000 / config.target_fps);

    'main_loop: loop {
        let prev = Instant::now();

        // handle events
        for ev in events.poll_iter() {
            match ev {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => game.key_down(k),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => game.key_up(k),
                _ => {}
            }
        }

        game.update();
        if let Err(err) = game.draw() {
            log::error!("error while drawing frame: {err}");
            Err(err)?;
        }
        game.canvas.present();

        let diff = prev.elapsed();
        if diff < delta {
            std::thread::sleep(delta - diff);
        }
    }

    log::info!("shutting down");
    Ok(())
}
