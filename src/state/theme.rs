use egui::{Color32, Visuals};

use crate::processing::chart_data::ColorTag;

/// Slate grey used for bars without a loss.
pub const NEUTRAL_BAR: Color32 = Color32::from_rgb(71, 85, 105);
/// Green used for bars lower than the previous entry.
pub const LOSS_BAR: Color32 = Color32::from_rgb(34, 197, 94);
/// Red used for the ±1σ reference lines.
pub const REFERENCE_LINE: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    pub fn bar_color(&self, tag: ColorTag) -> Color32 {
        match tag {
            ColorTag::Neutral => NEUTRAL_BAR,
            ColorTag::Loss => LOSS_BAR,
        }
    }

    /// Text on the toggle button, naming the theme it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}
