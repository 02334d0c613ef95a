use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Net Worth Breakdown";

/// Value Object - 3D view of the pie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options3d {
    pub enabled: bool,
    /// Tilt towards the viewer, degrees
    pub alpha: f64,
    /// Extrusion of the pie, px
    pub depth: f64,
}

impl Default for Options3d {
    fn default() -> Self {
        Self { enabled: true, alpha: 45.0, depth: 45.0 }
    }
}

impl Options3d {
    /// Vertical squash of the top face
    pub fn tilt_factor(&self) -> f64 {
        if self.enabled { self.alpha.to_radians().cos() } else { 1.0 }
    }

    /// On-screen thickness of the extruded side
    pub fn visible_depth(&self) -> f64 {
        if self.enabled { self.depth * self.alpha.to_radians().sin() } else { 0.0 }
    }
}

/// Value Object - number formatting symbols
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LangOptions {
    pub decimal_point: char,
    pub thousands_sep: char,
}

impl Default for LangOptions {
    fn default() -> Self {
        Self { decimal_point: '.', thousands_sep: ',' }
    }
}

/// Value Object - dark theme colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub background: String,
    pub text: String,
    pub palette: Vec<String>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let palette = [
            "#2b908f", "#90ee7e", "#f45b5b", "#7798BF", "#aaeeee", "#ff0066", "#eeaaee", "#55BF3B",
            "#DF5353", "#7798BF", "#aaeeee",
        ];
        Self {
            background: "#2a2a2b".to_string(),
            text: "#E0E0E3".to_string(),
            palette: palette.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartTheme {
    /// Slice colour, cycling through the palette
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "#7798BF";
        }
        &self.palette[index % self.palette.len()]
    }
}

/// Value Object - everything the pie renderer needs besides the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartOptions {
    pub title: String,
    pub options3d: Options3d,
    /// Diameter of the donut hole, px
    pub inner_size: f64,
    pub lang: LangOptions,
    pub theme: ChartTheme,
    pub data_labels: bool,
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            options3d: Options3d::default(),
            inner_size: 100.0,
            lang: LangOptions::default(),
            theme: ChartTheme::default(),
            data_labels: true,
        }
    }
}
