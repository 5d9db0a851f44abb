//! Nordic Frost color theme definitions.
//!
//! Colors used by the interactive screen. Availability colouring is purely
//! presentational: green rows are available, red rows are borrowed.

use ratatui::style::Color;

// === Nord Palette ===

/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);
/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);
/// Frost accent 3 - light blue.
pub const NORD_FROST_3: Color = Color::Rgb(129, 161, 193);
/// Aurora red.
pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
/// Aurora yellow.
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
/// Aurora green.
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === Semantic Color Aliases ===

/// Primary text color.
pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
/// Keys and highlighted labels.
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
/// Screen titles.
pub const TITLE: Color = NORD_FROST_3;
/// Row color for an available bicycle.
pub const AVAILABLE: Color = NORD_GREEN;
/// Row color for a borrowed bicycle.
pub const BORROWED: Color = NORD_RED;
/// Success toast color.
pub const SUCCESS: Color = NORD_GREEN;
/// Warning toast color.
pub const WARNING: Color = NORD_YELLOW;
/// Error toast color.
pub const ERROR: Color = NORD_RED;
/// Info toast color.
pub const INFO: Color = NORD_FROST_2;

// === UI Element Colors ===

/// Default border color.
pub const BORDER_DEFAULT: Color = NORD_POLAR_NIGHT_3;
/// Focused element border color.
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
/// Selected row background color.
pub const ROW_SELECTED_BG: Color = Color::Rgb(40, 40, 40);
