//! Centralized color scheme for consistent output formatting

use colored::{ColoredString, Colorize};

use crate::catalog::Axis;

/// Axis indicators and colors
pub struct AxisIndicator;

impl AxisIndicator {
    /// Energy footprint smells
    pub fn environmental() -> ColoredString {
        "🌱".normal()
    }

    /// Privacy/inclusion smells
    pub fn social() -> ColoredString {
        "🫂".normal()
    }

    pub fn for_axis(axis: &Axis) -> ColoredString {
        match axis {
            Axis::Environmental => Self::environmental(),
            Axis::Social => Self::social(),
        }
    }

    /// Axis label with its color
    pub fn label(axis: &Axis) -> ColoredString {
        match axis {
            Axis::Environmental => axis.as_str().green(),
            Axis::Social => axis.as_str().blue(),
        }
    }
}

/// Structural element colors
pub struct StructureColors;

impl StructureColors {
    /// Category header
    pub fn category(text: &str) -> ColoredString {
        text.magenta().bold()
    }

    /// Smell name
    pub fn smell_name(text: &str) -> ColoredString {
        text.white().bold()
    }

    /// Count/statistics numbers
    pub fn count(text: &str) -> ColoredString {
        text.white().bold()
    }
}

/// Bar chart characters for summary display
pub struct ChartChars;

impl ChartChars {
    pub const FILLED: char = '█';
    pub const EMPTY: char = '░';

    /// Create a progress bar string
    pub fn bar(percentage: f64, width: usize) -> String {
        let filled = ((percentage / 100.0) * width as f64).round() as usize;
        let empty = width.saturating_sub(filled);
        format!(
            "{}{}",
            Self::FILLED.to_string().repeat(filled),
            Self::EMPTY.to_string().repeat(empty)
        )
    }
}

/// Box drawing characters for headers and footers
pub struct BoxChars;

impl BoxChars {
    /// Heavy separator line
    pub fn heavy_line(width: usize) -> String {
        "━".repeat(width)
    }

    /// Light separator line
    pub fn light_line(width: usize) -> String {
        "─".repeat(width)
    }
}
