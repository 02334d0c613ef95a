#![cfg(target_arch = "wasm32")]

use net_worth_chart_wasm::domain::balance::ChartPair;
use net_worth_chart_wasm::domain::chart::PieChartOptions;
use net_worth_chart_wasm::infrastructure::rendering::PieCanvasRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn pixel(canvas: &web_sys::HtmlCanvasElement, x: f64, y: f64) -> Vec<u8> {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().to_vec()
}

#[wasm_bindgen_test]
fn renders_slices_onto_canvas() {
    let canvas = canvas();
    let renderer = PieCanvasRenderer::new(800, 500, PieChartOptions::default());
    let pairs = vec![ChartPair::new("Checking", 1.0)];
    renderer.render(&canvas, &pairs).unwrap();

    assert_eq!(canvas.width(), 800);
    // Corner keeps the background colour #2a2a2b
    assert_eq!(&pixel(&canvas, 1.0, 1.0)[..3], &[0x2a, 0x2a, 0x2b]);

    let layout = renderer.layout();
    let (x, y) = layout.project(0.0, (layout.radius + layout.inner_radius) / 2.0);
    // Single slice takes the first palette colour #2b908f
    assert_eq!(&pixel(&canvas, x.round(), y.round())[..3], &[0x2b, 0x90, 0x8f]);
}

#[wasm_bindgen_test]
fn empty_series_renders_background_only() {
    let canvas = canvas();
    let renderer = PieCanvasRenderer::new(400, 300, PieChartOptions::default());
    renderer.render(&canvas, &[]).unwrap();
    let layout = renderer.layout();
    let (x, y) = layout.project(0.0, layout.radius - 2.0);
    assert_eq!(&pixel(&canvas, x.round(), y.round())[..3], &[0x2a, 0x2a, 0x2b]);
}
