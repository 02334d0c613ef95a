use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{PieLayout, SliceGeometry, compute_slices, shade};
use crate::domain::{
    balance::{ChartPair, total_net_worth},
    chart::{PieChartOptions, format_currency},
    logging::{LogComponent, get_logger},
};

/// Side walls are drawn this much darker than the top face
const SIDE_SHADE: f64 = 0.65;

/// Canvas 2D renderer for the 3D donut chart - Infrastructure implementation
pub struct PieCanvasRenderer {
    width: u32,
    height: u32,
    options: PieChartOptions,
}

impl PieCanvasRenderer {
    pub fn new(width: u32, height: u32, options: PieChartOptions) -> Self {
        Self { width, height, options }
    }

    pub fn layout(&self) -> PieLayout {
        PieLayout::for_canvas(self.width as f64, self.height as f64, &self.options)
    }

    fn context_for(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Draw the whole chart: background, title, sides, top faces, labels
    pub fn render(&self, canvas: &HtmlCanvasElement, pairs: &[ChartPair]) -> Result<(), JsValue> {
        let context = self.context_for(canvas)?;
        let layout = self.layout();
        let slices = compute_slices(pairs, &self.options.theme);

        get_logger().debug(
            LogComponent::Infrastructure("PieCanvasRenderer"),
            &format!("Rendering {} slices (radius {:.1})", slices.len(), layout.radius),
        );

        context.set_fill_style_str(&self.options.theme.background);
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.render_title(&context, pairs)?;

        // Bottom layers first so the top face covers them
        let depth_px = layout.depth.round() as i32;
        for offset in (1..=depth_px).rev() {
            for slice in slices.iter().filter(|s| s.sweep() > 0.0) {
                context.set_fill_style_str(&shade(&slice.color, SIDE_SHADE));
                self.trace_slice(&context, &layout, slice, offset as f64)?;
                context.fill();
            }
        }

        context.set_stroke_style_str(&self.options.theme.background);
        context.set_line_width(1.0);
        for slice in slices.iter().filter(|s| s.sweep() > 0.0) {
            context.set_fill_style_str(&slice.color);
            self.trace_slice(&context, &layout, slice, 0.0)?;
            context.fill();
            context.stroke();
        }

        if self.options.data_labels {
            self.render_labels(&context, &layout, &slices, pairs)?;
        }

        Ok(())
    }

    /// Path of one slice's face, `y_offset` px below the top face
    fn trace_slice(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &PieLayout,
        slice: &SliceGeometry,
        y_offset: f64,
    ) -> Result<(), JsValue> {
        let cy = layout.center_y + y_offset;
        context.begin_path();
        context.ellipse(
            layout.center_x,
            cy,
            layout.radius,
            layout.radius * layout.tilt,
            0.0,
            slice.start_angle,
            slice.end_angle,
        )?;
        if layout.inner_radius > 0.0 {
            context.ellipse_with_anticlockwise(
                layout.center_x,
                cy,
                layout.inner_radius,
                layout.inner_radius * layout.tilt,
                0.0,
                slice.end_angle,
                slice.start_angle,
                true,
            )?;
        } else {
            context.line_to(layout.center_x, cy);
        }
        context.close_path();
        Ok(())
    }

    fn render_title(&self, context: &CanvasRenderingContext2d, pairs: &[ChartPair]) -> Result<(), JsValue> {
        let center = self.width as f64 / 2.0;
        context.set_fill_style_str(&self.options.theme.text);
        context.set_text_align("center");
        context.set_text_baseline("alphabetic");

        context.set_font("20px 'Unica One', sans-serif");
        context.fill_text(&self.options.title.to_uppercase(), center, 32.0)?;

        context.set_font("12px 'Unica One', sans-serif");
        let subtitle = format!("Total: {}", format_currency(total_net_worth(pairs), &self.options.lang));
        context.fill_text(&subtitle, center, 54.0)?;
        Ok(())
    }

    fn render_labels(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &PieLayout,
        slices: &[SliceGeometry],
        pairs: &[ChartPair],
    ) -> Result<(), JsValue> {
        context.set_font("11px sans-serif");
        context.set_fill_style_str(&self.options.theme.text);
        context.set_text_baseline("middle");

        for (slice, pair) in slices.iter().zip(pairs).filter(|(s, _)| s.sweep() > 0.0) {
            let (x, y, align) = layout.label_anchor(slice);
            context.set_text_align(align);
            context.fill_text(pair.label(), x, y)?;
        }
        Ok(())
    }
}
