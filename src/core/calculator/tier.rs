//! Visual tiers for hours fields and row totals.

use ansi_term::{Colour, Style};
use serde::Serialize;

/// Styling of a single hours field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTier {
    Completed,
    Partial,
    Empty,
}

/// Styling of a row total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowTier {
    Full,
    Partial,
    Low,
}

/// `value >= required` wins over everything else, so a zero-hour event is
/// completed at 0.
pub fn field_tier(value: f64, required: f64) -> FieldTier {
    if value >= required {
        FieldTier::Completed
    } else if value > 0.0 {
        FieldTier::Partial
    } else {
        FieldTier::Empty
    }
}

pub fn row_tier(total: f64, required_total: f64) -> RowTier {
    if total >= required_total {
        RowTier::Full
    } else if total >= required_total * 0.5 {
        RowTier::Partial
    } else {
        RowTier::Low
    }
}

impl FieldTier {
    pub fn style(&self) -> Style {
        match self {
            FieldTier::Completed => Colour::Green.normal(),
            FieldTier::Partial => Colour::Yellow.normal(),
            FieldTier::Empty => Style::default(),
        }
    }
}

impl RowTier {
    /// Foreground colour as RGB.
    pub fn foreground_rgb(&self) -> (u8, u8, u8) {
        match self {
            RowTier::Full => (0x10, 0xb9, 0x81),
            RowTier::Partial => (0xf5, 0x9e, 0x0b),
            RowTier::Low => (0xef, 0x44, 0x44),
        }
    }

    /// Background colour as RGB.
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        match self {
            RowTier::Full => (0xd1, 0xfa, 0xe5),
            RowTier::Partial => (0xfe, 0xf3, 0xc7),
            RowTier::Low => (0xfe, 0xe2, 0xe2),
        }
    }

    pub fn style(&self) -> Style {
        let (fr, fg, fb) = self.foreground_rgb();
        let (br, bg, bb) = self.background_rgb();
        Colour::RGB(fr, fg, fb).on(Colour::RGB(br, bg, bb)).bold()
    }
}
