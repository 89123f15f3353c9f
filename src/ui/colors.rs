use ratatui::style::Color;

// Matrix Palette
pub const MATRIX_GREEN: Color = Color::Rgb(0, 255, 65);
pub const DARK_GREEN: Color = Color::Rgb(0, 100, 0);
pub const SOFT_GREEN: Color = Color::Rgb(80, 200, 120);
pub const BRIGHT_GREEN: Color = Color::Rgb(150, 255, 150);
pub const HIGHLIGHT_BG: Color = Color::Rgb(20, 45, 25);

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_DIM: Color = Color::Rgb(110, 110, 110);

// Subscription states
pub const STATUS_ACTIVE: Color = MATRIX_GREEN;
pub const STATUS_INACTIVE: Color = Color::Rgb(255, 100, 100);
pub const STATUS_UNKNOWN: Color = Color::Rgb(255, 200, 80);
