use super::Config;
use crate::{Cell, EvolutionScheduler, GridState};
use ahash::AHashMap;
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) scheduler: EvolutionScheduler, // Grid evolution engine and its clock.
    pub(super) next_tick: Option<Instant>,    // Deadline of the pending scheduled tick.
    pub(super) variants: AHashMap<Cell, usize>, // View-owned color-cycle index per living cell.
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let grid = GridState::new(Config::BOARD_ROWS, Config::BOARD_COLS);
        Self {
            scheduler: EvolutionScheduler::new(grid),
            next_tick: None,
            variants: AHashMap::new(),
        }
    }

    pub(super) fn toggle_play(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
            self.next_tick = None;
        } else {
            let delay = self.scheduler.resume();
            self.next_tick = Some(Instant::now() + delay);
        }
    }

    pub(super) fn randomize_board(&mut self) {
        self.scheduler
            .grid_mut()
            .randomize(None, Config::RANDOM_FILL_RATE);
        self.variants.clear();
    }

    pub(super) fn clear_board(&mut self) {
        self.scheduler.reset();
        self.next_tick = None;
        self.variants.clear();
    }

    /// Click on a cell: births a dead cell, cycles the color variant of a
    /// living one. Never kills.
    pub(super) fn click_cell(&mut self, cell: Cell) {
        match self.scheduler.grid().is_alive(cell) {
            Ok(true) => {
                let variant = self.variants.entry(cell).or_default();
                *variant = (*variant + 1) % Config::ALIVE_VARIANTS.len();
            }
            Ok(false) => {
                let _ = self.scheduler.grid_mut().toggle(cell);
                self.variants.insert(cell, 0);
            }
            Err(err) => log::warn!("ignoring click outside the board: {err}"),
        }
    }

    /// Fires the pending tick once its deadline has passed and re-arms the
    /// deadline from the delay the scheduler reports.
    fn advance_if_due(&mut self) {
        if let Some(due) = self.next_tick {
            if Instant::now() >= due {
                self.next_tick = self.scheduler.tick().map(|delay| Instant::now() + delay);

                let grid = self.scheduler.grid();
                self.variants.retain(|&cell, _| grid.is_alive(cell).unwrap_or(false));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.advance_if_due();

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| self.draw_controls(ui));
                    self.draw_board(ui);
                });
            });

        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.toggle_play();
            }
        });

        if let Some(due) = self.next_tick {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }
}
