#![warn(clippy::all)]

mod grid;
mod gui;

pub use grid::{Grid, GridError};
pub use gui::{App, Config};
