#![warn(clippy::all)]

use life::{App, Config, Grid};
use std::process::exit;

fn main() -> Result<(), eframe::Error> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let (ncols, nrows) = parse_dimensions(std::env::args().skip(1)).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        eprintln!("usage: life [NCOLS NROWS]");
        exit(2);
    });

    let grid = Grid::random(nrows, ncols, Config::ALIVE_PROBABILITY, None).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        exit(2);
    });
    log::info!(
        "starting with a {nrows}x{ncols} grid, {} cells alive",
        grid.population()
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(Config::WINDOW_WIDTH, Config::WINDOW_HEIGHT))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(grid)))),
    )
}

/// Positional `NCOLS NROWS` arguments; both or neither must be present.
fn parse_dimensions(args: impl Iterator<Item = String>) -> Result<(usize, usize), String> {
    let args: Vec<String> = args.collect();
    match args.as_slice() {
        [] => Ok((Config::DEFAULT_COLS, Config::DEFAULT_ROWS)),
        [ncols, nrows] => {
            let ncols = ncols
                .parse::<usize>()
                .map_err(|_| format!("NCOLS must be a non-negative integer, got {ncols:?}"))?;
            let nrows = nrows
                .parse::<usize>()
                .map_err(|_| format!("NROWS must be a non-negative integer, got {nrows:?}"))?;
            Ok((ncols, nrows))
        }
        _ => Err(format!(
            "expected zero or two arguments, got {}",
            args.len()
        )),
    }
}
