use super::{App, Config};
use eframe::egui::{pos2, vec2, Rect, Ui};

impl App {
    /// Paints one filled rectangle per live cell over the cleared panel.
    ///
    /// Cell `(row, col)` covers a region of `(W/cols) x (H/rows)` pixels
    /// with its origin at `(col * W/cols, row * H/rows)`. The mapping is
    /// recomputed from the panel rectangle every frame, not stored.
    pub(super) fn draw_cells(&self, ui: &Ui) {
        let surface = ui.max_rect();
        let cell_w = surface.width() / self.grid.cols() as f32;
        let cell_h = surface.height() / self.grid.rows() as f32;

        let painter = ui.painter();
        for (row, col) in self.grid.alive_cells() {
            let origin = pos2(
                surface.left() + col as f32 * cell_w,
                surface.top() + row as f32 * cell_h,
            );
            painter.rect_filled(
                Rect::from_min_size(origin, vec2(cell_w, cell_h)),
                0.,
                Config::CELL_COLOR,
            );
        }
    }
}
