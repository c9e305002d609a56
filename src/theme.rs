//! Centralized design tokens for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Polymer - teal brand accents on a slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const TEXT_DIM: Color = Color::Rgb(100, 116, 139); // slate-500

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const BG_SURFACE: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const BG_HIGHLIGHT: Color = Color::Rgb(51, 65, 85); // slate-700

    // Brand
    pub const PRIMARY: Color = Color::Rgb(20, 184, 166); // teal-500
    pub const PRIMARY_LIGHT: Color = Color::Rgb(94, 234, 212); // teal-300

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
    pub const WARNING: Color = Color::Rgb(234, 179, 8);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);
    pub const INFO: Color = Color::Rgb(59, 130, 246);

    // Accents used for suggestion types
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const VIOLET: Color = Color::Rgb(139, 92, 246);
    pub const SKY: Color = Color::Rgb(14, 165, 233);
    pub const ROSE: Color = Color::Rgb(244, 63, 94);
}

/// Search input styles
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::PRIMARY;
    pub const BORDER_LOADING: Color = palette::TEXT_DIM;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Suggestion dropdown styles
pub mod suggestions {
    use super::*;

    pub const BORDER: Color = palette::PRIMARY;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT;
    pub const CATEGORY: Color = palette::TEXT_MUTED;
    pub const LABEL: Color = palette::TEXT_DIM;

    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const SELECTED_FG: Color = palette::TEXT;
    pub const SELECTED_MARKER: Color = palette::PRIMARY_LIGHT;

    // Matched portion of the suggestion name
    pub const MATCH: Style = Style::new()
        .fg(palette::PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD);

    pub const LOADING: Color = palette::TEXT_MUTED;
    pub const EMPTY: Color = palette::TEXT_MUTED;

    // Per-type icon colors
    pub const MATERIAL: Color = palette::SKY;
    pub const MACHINE: Color = palette::AMBER;
    pub const JOB: Color = palette::VIOLET;
    pub const MOULD: Color = palette::ROSE;
    pub const OTHER: Color = palette::TEXT_MUTED;
}

/// Toast notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(20, 83, 45),
        border: palette::SUCCESS,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(127, 29, 29),
        border: palette::ERROR,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(30, 58, 138),
        border: palette::INFO,
    };

    pub const LOADING: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::TEXT_MUTED,
    };

    pub const ACTION: Style = Style::new().add_modifier(Modifier::UNDERLINED);
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::PRIMARY_LIGHT;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
}
