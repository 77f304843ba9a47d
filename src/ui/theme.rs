use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    // Element role colors
    pub unsorted: Color,
    pub comparing: Color,
    pub swapping: Color,
    pub sorted: Color,
    pub pivot: Color,
    pub left_bound: Color,
    pub right_bound: Color,
    pub mid: Color,
    pub found: Color,
    pub eliminated: Color,
    pub flash: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    unsorted: Color::Rgb(137, 180, 250),    // Blue
    comparing: Color::Rgb(249, 226, 175),   // Yellow
    swapping: Color::Rgb(243, 139, 168),    // Red
    sorted: Color::Rgb(166, 227, 161),      // Green
    pivot: Color::Rgb(203, 166, 247),       // Purple
    left_bound: Color::Rgb(137, 180, 250),  // Blue
    right_bound: Color::Rgb(203, 166, 247), // Purple
    mid: Color::Rgb(249, 226, 175),         // Yellow
    found: Color::Rgb(166, 227, 161),       // Green
    eliminated: Color::Rgb(108, 112, 134),  // Grey
    flash: Color::Rgb(148, 226, 213),       // Teal
};
