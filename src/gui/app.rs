use super::Config;
use crate::grid::Grid;
use eframe::egui::{CentralPanel, Context, Frame};

/// Whether the simulation loop is still running.
///
/// `Terminated` is absorbing: once a close request has been observed the
/// grid is never stepped again, even if the backend delivers more frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum LoopState {
    Running,
    Terminated,
}

/// Owns the grid and drives the render/step cycle.
///
/// Each `update` call from the backend is one loop iteration: draw the
/// current generation, check for a close request, then advance the grid.
pub struct App {
    pub(super) grid: Grid,
    pub(super) state: LoopState,
    pub(super) generation: u64, // Generations stepped since startup.
}

impl App {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: LoopState::Running,
            generation: 0,
        }
    }

    /// One scheduling decision per frame: a pending quit wins over
    /// stepping, and nothing is stepped after termination.
    fn advance(&mut self, quit_requested: bool) {
        if quit_requested && self.state == LoopState::Running {
            log::info!("close requested at generation {}", self.generation);
            self.state = LoopState::Terminated;
        }
        if self.state == LoopState::Terminated {
            return;
        }

        self.grid.step();
        self.generation += 1;
        if self.generation % Config::LOG_EVERY == 0 {
            log::debug!(
                "generation {}: {} cells alive",
                self.generation,
                self.grid.population()
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel, cleared to the background color
        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                ctx.request_repaint();
                self.draw_cells(ui);
            });

        // eframe tears the window down after this frame on its own;
        // stepping has to stop now
        let quit_requested = ctx.input(|i| i.viewport().close_requested());
        self.advance(quit_requested);
    }
}
