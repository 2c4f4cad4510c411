//! Grid ray-casting renderer core.
//!
//! Each frame the [`Player`] moves against the [`Grid`], one [`Ray`] is cast
//! per screen column with [`cast_all`], and the [`Projection`] turns those hits
//! into shaded wall slices. Drawing goes through the [`Painter`] trait so none
//! of this needs a window.

pub mod config;
pub mod map;
pub mod paint;
pub mod player;
pub mod projector;
pub mod ray;

pub use config::Config;
pub use map::Grid;
pub use paint::{Painter, Rgba};
pub use player::{Player, Turn, Walk};
pub use projector::{Projection, WallSlice};
pub use ray::{cast_all, Ray};

#[cfg(feature = "sdl")]
pub mod sdl;
