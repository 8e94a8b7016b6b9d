use super::{App, Config};
use eframe::egui::{vec2, Button, Rect, RichText, Sense, Slider, Stroke, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.set_width(Config::CONTROL_PANEL_WIDTH);

        let text = if self.scheduler.is_running() {
            "Pause"
        } else {
            "Play"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_play();
        }

        ui.add_space(Config::WIDGET_GAP);
        ui.label(Self::new_text("Simulation speed"));
        let mut speed = self.scheduler.speed();
        if ui.add(Slider::new(&mut speed, 0..=100)).changed() {
            self.scheduler.set_speed(speed);
        }

        ui.add_space(Config::WIDGET_GAP);
        if ui.add(Self::new_button("Randomize")).clicked() {
            self.randomize_board();
        }
        if ui.add(Self::new_button("Clear")).clicked() {
            self.clear_board();
        }

        ui.add_space(Config::WIDGET_GAP);
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.scheduler.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.scheduler.grid().population()
        )));
    }

    pub(super) fn draw_board(&mut self, ui: &mut Ui) {
        let (rows, cols) = self.scheduler.grid().size();
        let size = vec2(
            cols as f32 * Config::CELL_SIZE,
            rows as f32 * Config::CELL_SIZE,
        );
        let (board_rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter_at(board_rect);

        painter.rect_filled(board_rect, 0., Config::DEAD_COLOR);
        painter.rect_stroke(
            board_rect,
            0.,
            Stroke::new(1., Config::BOARD_OUTLINE_COLOR),
        );
        for cell in self.scheduler.grid().alive_cells() {
            let (row, col) = cell;
            let min = board_rect.min
                + vec2(
                    col as f32 * Config::CELL_SIZE,
                    row as f32 * Config::CELL_SIZE,
                );
            let cell_rect = Rect::from_min_size(min, vec2(Config::CELL_SIZE, Config::CELL_SIZE))
                .shrink(Config::CELL_GAP);
            let variant = self.variants.get(&cell).copied().unwrap_or(0);
            painter.rect_filled(
                cell_rect,
                Config::CELL_ROUNDING,
                Config::ALIVE_VARIANTS[variant],
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - board_rect.min.x) / Config::CELL_SIZE) as i64;
                let row = ((pos.y - board_rect.min.y) / Config::CELL_SIZE) as i64;
                // a click on the very edge of the board maps to the last cell
                let cell = (row.min(rows as i64 - 1), col.min(cols as i64 - 1));
                self.click_cell(cell);
            }
        }
    }
}
