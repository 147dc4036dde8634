use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_WIDTH: f32 = 1000.;
    pub const WINDOW_HEIGHT: f32 = 800.;

    pub const DEFAULT_COLS: usize = 100;
    pub const DEFAULT_ROWS: usize = 100;

    /// Probability that a cell starts out alive.
    pub const ALIVE_PROBABILITY: f64 = 0.10;

    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLACK;

    /// Generations between progress lines in the debug log.
    pub const LOG_EVERY: u64 = 300;
}
