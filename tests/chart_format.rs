use net_worth_chart_wasm::app::tooltip_at;
use net_worth_chart_wasm::config::NetWorthChartConfig;
use net_worth_chart_wasm::domain::balance::ChartPair;
use net_worth_chart_wasm::domain::chart::{LangOptions, PieChartOptions, format_currency};
use net_worth_chart_wasm::infrastructure::rendering::PieLayout;

#[test]
fn currency_uses_locale_grouping() {
    let lang = LangOptions::default();
    assert_eq!(format_currency(1234567.891, &lang), "$ 1,234,567.891");
    assert_eq!(format_currency(1234.5, &lang), "$ 1,234.5");
    assert_eq!(format_currency(0.0, &lang), "$ 0");
    assert_eq!(format_currency(-410.0, &lang), "$ -410");
}

#[test]
fn default_options_match_dark_3d_donut() {
    let options = PieChartOptions::default();
    assert_eq!(options.title, "Net Worth Breakdown");
    assert!(options.options3d.enabled);
    assert_eq!(options.options3d.alpha, 45.0);
    assert_eq!(options.options3d.depth, 45.0);
    assert_eq!(options.inner_size, 100.0);
    assert_eq!(options.lang, LangOptions { decimal_point: '.', thousands_sep: ',' });
}

#[test]
fn tooltip_over_slice_shows_name_and_value() {
    let config = NetWorthChartConfig::default();
    let pairs = vec![ChartPair::new("Checking", 1234.56)];
    let layout = PieLayout::for_canvas(800.0, 500.0, &config.options);
    let (x, y) = layout.project(0.0, (layout.radius + layout.inner_radius) / 2.0);

    let tooltip = tooltip_at(&pairs, &config, x, y).expect("point is on the slice");
    assert_eq!(tooltip.index, 0);
    assert_eq!(tooltip.text, "Checking\n$ 1,234.56");
}

#[test]
fn tooltip_in_hole_is_none() {
    let config = NetWorthChartConfig::default();
    let pairs = vec![ChartPair::new("Checking", 1.0)];
    let layout = PieLayout::for_canvas(800.0, 500.0, &config.options);
    assert_eq!(tooltip_at(&pairs, &config, layout.center_x, layout.center_y), None);
}
