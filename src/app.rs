use futures::future::{AbortHandle, Abortable};
use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::LoadBalancesUseCase,
    config::NetWorthChartConfig,
    domain::{
        balance::ChartPair,
        chart::{LangOptions, LoadState, tooltip_text},
        logging::LogComponent,
    },
    infrastructure::{
        export::export_png,
        http::BalanceHttpClient,
        rendering::{PieCanvasRenderer, PieLayout, compute_slices},
    },
    log_error,
};

/// 🎯 Tooltip content and where to show it
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TooltipData {
    pub fn new(index: usize, pair: &ChartPair, x: f64, y: f64, lang: &LangOptions) -> Self {
        Self { index, x, y, text: tooltip_text(pair, lang) }
    }
}

/// Tooltip for the slice under canvas coordinates `(x, y)`, if any
pub fn tooltip_at(pairs: &[ChartPair], config: &NetWorthChartConfig, x: f64, y: f64) -> Option<TooltipData> {
    let layout = PieLayout::for_canvas(config.canvas_width as f64, config.canvas_height as f64, &config.options);
    let slices = compute_slices(pairs, &config.options.theme);
    let index = layout.hit_test(&slices, x, y)?;
    pairs
        .get(index)
        .map(|pair| TooltipData::new(index, pair, x, y, &config.options.lang))
}

/// 🥧 Net worth pie chart.
///
/// Fetches balances once on mount and draws nothing until they arrive. Loading
/// and failure look the same: an empty slot. Unmounting aborts the fetch.
#[component]
pub fn NetWorthChart(
    /// Session token. Only sent when `config.client.forward_token` is set.
    #[prop(into)]
    token: String,
    #[prop(optional)] config: Option<NetWorthChartConfig>,
) -> impl IntoView {
    let config = store_value(config.unwrap_or_default());
    let (state, set_state) = create_signal(LoadState::Idle);
    let (tooltip, set_tooltip) = create_signal::<Option<TooltipData>>(None);
    let canvas_ref = create_node_ref::<Canvas>();

    let (abort_handle, registration) = AbortHandle::new_pair();
    on_cleanup(move || abort_handle.abort());

    let use_case = LoadBalancesUseCase::new(BalanceHttpClient::new(config.with_value(|c| c.client.clone())));
    set_state.set(LoadState::Loading);
    spawn_local(async move {
        // Aborted futures resolve to Err and leave the disposed signals alone
        if let Ok(next) = Abortable::new(use_case.execute(&token), registration).await {
            set_state.set(next);
        }
    });

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        state.with(|state| {
            let Some(pairs) = state.chart_data() else { return };
            config.with_value(|config| {
                let renderer =
                    PieCanvasRenderer::new(config.canvas_width, config.canvas_height, config.options.clone());
                if let Err(e) = renderer.render(&canvas, pairs) {
                    log_error!(LogComponent::Presentation("NetWorthChart"), "❌ Render error: {:?}", e);
                }
            });
        });
    });

    view! {
        <style>
            {r#"
            .net-worth-chart .chart-wrapper {
                position: relative;
                display: inline-block;
            }

            .net-worth-chart .tooltip {
                position: absolute;
                background: rgba(0, 0, 0, 0.85);
                color: #F0F0F0;
                padding: 8px 12px;
                border-radius: 4px;
                font-size: 12px;
                white-space: pre-line;
                pointer-events: none;
                z-index: 1000;
                transform: translate(12px, -100%);
            }

            .net-worth-chart .export-btn {
                position: absolute;
                top: 10px;
                right: 10px;
                background: #505053;
                color: #E0E0E3;
                border: none;
                padding: 5px 10px;
                border-radius: 4px;
                cursor: pointer;
                font-size: 12px;
            }

            .net-worth-chart .export-btn:hover {
                background: #707073;
            }
            "#}
        </style>
        <div class="net-worth-chart">
            <Show when=move || state.with(|s| s.chart_data().is_some())>
                <div class="chart-wrapper">
                    <canvas
                        node_ref=canvas_ref
                        width=move || config.with_value(|c| c.canvas_width.to_string())
                        height=move || config.with_value(|c| c.canvas_height.to_string())
                        on:mousemove=move |event: web_sys::MouseEvent| {
                            let x = event.offset_x() as f64;
                            let y = event.offset_y() as f64;
                            let hit = state.with_untracked(|s| {
                                s.chart_data()
                                    .and_then(|pairs| config.with_value(|c| tooltip_at(pairs, c, x, y)))
                            });
                            set_tooltip.set(hit);
                        }
                        on:mouseleave=move |_| set_tooltip.set(None)
                    />
                    <ChartTooltip tooltip=tooltip />
                    <button
                        class="export-btn"
                        on:click=move |_| {
                            let Some(canvas) = canvas_ref.get_untracked() else { return };
                            config.with_value(|c| {
                                if let Err(e) = export_png(&canvas, &c.export_filename) {
                                    log_error!(LogComponent::Presentation("NetWorthChart"), "❌ Export failed: {:?}", e);
                                }
                            });
                        }
                    >
                        "Download PNG"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChartTooltip(tooltip: ReadSignal<Option<TooltipData>>) -> impl IntoView {
    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip.with(Option::is_some) { "block" } else { "none" }
            style:left=move || tooltip.with(|t| format!("{}px", t.as_ref().map_or(0.0, |t| t.x)))
            style:top=move || tooltip.with(|t| format!("{}px", t.as_ref().map_or(0.0, |t| t.y)))
        >
            {move || tooltip.with(|t| t.as_ref().map(|t| t.text.clone()).unwrap_or_default())}
        </div>
    }
}
