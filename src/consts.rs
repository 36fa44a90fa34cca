use plotters::style::RGBColor;

// === INPUT / OUTPUT ===
pub const DEFAULT_INPUT: &str = "analysis.ptn";
pub const DEFAULT_OUTPUT: &str = "graph.png";

/// Sign, exactly one digit, a point, then any fraction digits.
pub const EVALUATION_PATTERN: &str = r"\{evaluation: ([+-]\d\.\d*)\}";

// === GEOMETRY ===
// Sizes are given in inches and rasterized at DPI, so one ply is 40 px wide.
pub const WIDTH_PER_PLY_IN: f64 = 0.2;
pub const HEIGHT_IN: f64 = 5.0;
pub const DPI: f64 = 200.0;
// Room for the title and both label areas.
pub const MIN_LABELLED_WIDTH_PX: u32 = 400;

pub const MARGIN_PX: u32 = 20;
pub const X_LABEL_AREA_PX: u32 = 70;
pub const Y_LABEL_AREA_PX: u32 = 90;
pub const STEP_LINE_WIDTH: u32 = 3;

// === AXES ===
pub const Y_MIN: f64 = -1.0;
pub const Y_MAX: f64 = 1.0;
pub const Y_LABEL_COUNT: usize = 9;

// === COLORS ===
pub const BACKGROUND: RGBColor = RGBColor(0x40, 0x40, 0x40);
pub const EVALUATION: RGBColor = RGBColor(0xfb, 0x8b, 0x24);
pub const ZERO_LINE: RGBColor = RGBColor(0x80, 0x80, 0x80);
pub const BLACK_FILL: RGBColor = RGBColor(0x00, 0x00, 0x00);
pub const WHITE_FILL: RGBColor = RGBColor(0xff, 0xff, 0xff);
pub const FIGURE: RGBColor = RGBColor(0xff, 0xff, 0xff);

// === LABELS ===
pub const TITLE: &str = "Evaluation Graph";
pub const X_DESC: &str = "Move Number";
pub const Y_DESC: &str = "Evaluation";
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_PX: u32 = 40;

pub const FONT_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
