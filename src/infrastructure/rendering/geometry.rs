//! Pie layout math, free of any browser API.
//!
//! Angles follow the canvas convention: radians, clockwise, 0 at 3 o'clock.
//! The 3D tilt squashes every y offset from the centre by `tilt`.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::domain::{
    balance::ChartPair,
    chart::{ChartTheme, PieChartOptions},
};

/// First slice starts at 12 o'clock
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// Space reserved above the pie for title and subtitle
pub const TITLE_SPACE: f64 = 70.0;
/// Horizontal room kept free for data labels
pub const LABEL_MARGIN_X: f64 = 90.0;
/// Vertical room kept free for data labels
pub const LABEL_MARGIN_Y: f64 = 30.0;
/// Distance of a data label from the rim
pub const LABEL_OFFSET: f64 = 18.0;

/// Pre-computed data for drawing one slice
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub percentage: f64,
}

impl SliceGeometry {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        self.sweep() > 0.0 && angle >= self.start_angle && angle < self.end_angle
    }
}

/// Slice angles in series order.
///
/// Each sweep is proportional to the value's share of the positive total.
/// Zero and negative values keep their place in the series with zero sweep.
pub fn compute_slices(pairs: &[ChartPair], theme: &ChartTheme) -> Vec<SliceGeometry> {
    let positive_total: f64 = pairs.iter().map(|p| p.value().max(0.0)).sum();

    let mut cursor = START_ANGLE;
    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let share = if positive_total > 0.0 { pair.value().max(0.0) / positive_total } else { 0.0 };
            let start_angle = cursor;
            cursor += share * TAU;
            SliceGeometry {
                index,
                start_angle,
                end_angle: cursor,
                color: theme.color_for(index).to_string(),
                percentage: share * 100.0,
            }
        })
        .collect()
}

/// Where the pie sits on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub inner_radius: f64,
    pub tilt: f64,
    pub depth: f64,
}

impl PieLayout {
    pub fn for_canvas(width: f64, height: f64, options: &PieChartOptions) -> Self {
        let tilt = options.options3d.tilt_factor().max(0.05);
        let depth = options.options3d.visible_depth().max(0.0);

        let available_w = (width - 2.0 * LABEL_MARGIN_X).max(0.0);
        let available_h = (height - TITLE_SPACE - 2.0 * LABEL_MARGIN_Y - depth).max(0.0);
        let radius = (available_w / 2.0).min(available_h / (2.0 * tilt));

        Self {
            center_x: width / 2.0,
            center_y: TITLE_SPACE + LABEL_MARGIN_Y + radius * tilt,
            radius,
            inner_radius: (options.inner_size / 2.0).clamp(0.0, radius),
            tilt,
            depth,
        }
    }

    /// Screen position of a point on the top face
    pub fn project(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin() * self.tilt,
        )
    }

    /// Un-tilted polar coordinates of a screen point, angle in `[START_ANGLE, START_ANGLE + TAU)`
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center_x;
        let dy = (y - self.center_y) / self.tilt;
        let angle = START_ANGLE + (dy.atan2(dx) - START_ANGLE).rem_euclid(TAU);
        (angle, dx.hypot(dy))
    }

    /// Index of the slice under a screen point, if the point is on the top face
    pub fn hit_test(&self, slices: &[SliceGeometry], x: f64, y: f64) -> Option<usize> {
        let (angle, distance) = self.unproject(x, y);
        if distance < self.inner_radius || distance > self.radius {
            return None;
        }
        slices.iter().find(|slice| slice.contains_angle(angle)).map(|slice| slice.index)
    }

    /// Anchor and text alignment of a slice's data label
    pub fn label_anchor(&self, slice: &SliceGeometry) -> (f64, f64, &'static str) {
        let angle = slice.mid_angle();
        let (x, y) = self.project(angle, self.radius + LABEL_OFFSET);
        let align = if angle.cos() >= 0.0 { "left" } else { "right" };
        // Labels on the front half sit below the extruded side
        let y = if angle.sin() > 0.0 { y + self.depth } else { y };
        (x, y, align)
    }
}

/// Darken (`factor < 1`) or lighten a `#rrggbb` colour. Other formats pass through.
pub fn shade(color: &str, factor: f64) -> String {
    let hex = match color.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.is_ascii() => hex,
        _ => return color.to_string(),
    };

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => {
            let scale = |c: u8| ((c as f64 * factor).round().clamp(0.0, 255.0)) as u8;
            format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
        }
        _ => color.to_string(),
    }
}
