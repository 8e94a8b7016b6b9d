use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const BOARD_ROWS: usize = 20;
    pub const BOARD_COLS: usize = 50;

    pub const CELL_SIZE: f32 = 24.;
    pub const CELL_GAP: f32 = 1.;
    pub const CELL_ROUNDING: f32 = 2.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 180.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;

    /// Fill colors a living cell cycles through on repeated clicks. The cycle
    /// index is view-side metadata; liveness itself stays boolean.
    pub const ALIVE_VARIANTS: [Color32; 5] = [
        Color32::WHITE,
        Color32::from_rgb(0x9b, 0xff, 0x23),
        Color32::from_rgb(0x23, 0xee, 0xff),
        Color32::from_rgb(0xeb, 0x23, 0xff),
        Color32::from_rgb(0xff, 0xa5, 0x23),
    ];
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const BOARD_OUTLINE_COLOR: Color32 = Color32::from_gray(40);

    pub const RANDOM_FILL_RATE: f64 = 0.3;
}
