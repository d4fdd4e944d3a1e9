//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    // Semantic colors - vibrant Galaxy palette
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);

    // Accent colors
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Toast styles
pub mod toast {
    use super::*;

    pub struct ToastColors {
        pub accent: Color,
        pub bg: Color,
    }

    // Backgrounds are the accent blended ~10% into BG_DARK
    pub const SUCCESS: ToastColors = ToastColors {
        accent: palette::SUCCESS,
        bg: Color::Rgb(34, 44, 54),
    };

    pub const ERROR: ToastColors = ToastColors {
        accent: palette::ERROR,
        bg: Color::Rgb(46, 34, 53),
    };

    pub const WARNING: ToastColors = ToastColors {
        accent: palette::WARNING,
        bg: Color::Rgb(49, 45, 48),
    };

    pub const INFO: ToastColors = ToastColors {
        accent: palette::INFO,
        bg: Color::Rgb(23, 45, 67),
    };

    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const MESSAGE: Color = palette::TEXT_MUTED;
    pub const CLOSE: Color = palette::TEXT_MUTED;
}

/// Confirmation dialog styles
pub mod confirm {
    use super::*;

    // Backdrop dims whatever is underneath
    pub const BACKDROP: Style = Style::new()
        .bg(Color::Rgb(12, 12, 22))
        .add_modifier(Modifier::DIM);

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const MESSAGE: Color = palette::TEXT_MUTED;

    pub const CANCEL_BUTTON: Style = Style::new().fg(palette::TEXT_MUTED).bg(palette::BG_HOVER);
    pub const CONFIRM_BUTTON: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);

    pub const HINT: Color = palette::TEXT_DIM;
}

/// Demo application styles
pub mod app {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TITLE: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(palette::WARNING)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const STATUS: Color = palette::TEXT_MUTED;
}
