use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub theme: SvgLayoutThemes,
    pub margins: bool, //draws the margin-expanded footprints
    pub labels: bool, //draws the refdes of every component
    pub sheet_limit: bool, //draws the sheet_max_x limit
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            margins: true,
            labels: true,
            sheet_limit: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: &'static str,
    pub existing_fill: &'static str,
    pub placed_fill: &'static str,
    pub margin_stroke: &'static str,
    pub limit_stroke: &'static str,
}

pub const EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    sheet_fill: "#F4F1DE",
    existing_fill: "#A8A39D",
    placed_fill: "#E07A5F",
    margin_stroke: "#3D405B",
    limit_stroke: "#81B29A",
};

pub const GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    sheet_fill: "#FFFFFF",
    existing_fill: "#D3D3D3",
    placed_fill: "#7A7A7A",
    margin_stroke: "#000000",
    limit_stroke: "#555555",
};
