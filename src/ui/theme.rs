use crate::models::{FeasibilityStatus, StatusTone, Suitability, WaterQuality};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Water colors
    pub const RAIN: Color = Color::LightBlue;
    pub const MONSOON: Color = Color::Blue;
    pub const HARVEST: Color = Color::Cyan;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn status_color(status: FeasibilityStatus) -> Color {
        match status.tone() {
            StatusTone::Positive => Self::SUCCESS,
            StatusTone::Caution => Self::WARNING,
            StatusTone::Negative => Self::ERROR,
        }
    }

    pub fn suitability_color(suitability: Suitability) -> Color {
        match suitability {
            Suitability::Excellent => Self::SUCCESS,
            Suitability::Good => Self::HIGHLIGHT,
            Suitability::Fair => Self::WARNING,
            Suitability::Poor => Self::ERROR,
        }
    }

    pub fn quality_color(quality: WaterQuality) -> Color {
        match quality {
            WaterQuality::Good => Self::SUCCESS,
            WaterQuality::Fair => Self::WARNING,
            WaterQuality::Poor => Self::ERROR,
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }
}
