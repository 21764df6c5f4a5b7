//! Chart Plugin
//!
//! Bar charts drawn on an HTML5 canvas. The plugin carries the series
//! palette (taken from the theme) and is provided to the component tree at
//! bootstrap; `BarChart` reads it from context.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::theme;

/// Chart settings shared by every chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPlugin {
    /// Series colors, cycled per bar
    pub palette: Vec<&'static str>,
    /// Canvas background
    pub background: &'static str,
    /// Axis and label color
    pub label_color: &'static str,
}

impl Default for ChartPlugin {
    fn default() -> Self {
        Self {
            palette: theme::PRIMARY.iter().rev().map(|(_, c)| *c).collect(),
            background: theme::CARD_BACKGROUND_DARK,
            label_color: theme::SECONDARY_TEXT,
        }
    }
}

impl ChartPlugin {
    pub fn color(&self, index: usize) -> &'static str {
        if self.palette.is_empty() {
            return self.label_color;
        }
        self.palette[index % self.palette.len()]
    }
}

/// Provide the chart plugin to the component tree
pub fn provide_charts(plugin: ChartPlugin) {
    provide_context(plugin);
}

/// A labelled value
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar geometry in canvas pixels
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 30.0;
const GAP_RATIO: f64 = 0.2;

/// Lay out bars on a `width` x `height` canvas.
///
/// Bars share the plot width evenly and are scaled against the largest
/// value; negative values are drawn as empty bars.
pub fn bar_layout(data: &[BarDatum], width: f64, height: f64) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }

    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
    let max = data
        .iter()
        .map(|d| d.value)
        .fold(0.0_f64, f64::max);

    let slot = plot_width / data.len() as f64;
    let bar_width = slot * (1.0 - GAP_RATIO);

    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let ratio = if max > 0.0 { (d.value.max(0.0) / max).min(1.0) } else { 0.0 };
            let bar_height = plot_height * ratio;
            BarRect {
                x: MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0,
                y: MARGIN_TOP + plot_height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Bar chart component
#[component]
pub fn BarChart(
    #[prop(into)]
    data: Signal<Vec<BarDatum>>,
    #[prop(default = 640)]
    width: u32,
    #[prop(default = 240)]
    height: u32,
) -> impl IntoView {
    let plugin = use_context::<ChartPlugin>().unwrap_or_default();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data changes
    create_effect(move |_| {
        let data = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &data, &plugin);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=width
            height=height
            class="w-full rounded-lg"
        />
    }
}

/// Paint `data` onto `canvas`
pub fn draw_bars(canvas: &HtmlCanvasElement, data: &[BarDatum], plugin: &ChartPlugin) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(plugin.background);
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.is_empty() {
        ctx.set_fill_style_str(plugin.label_color);
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
        return;
    }

    // Baseline
    ctx.set_stroke_style_str(plugin.label_color);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, height - MARGIN_BOTTOM);
    ctx.line_to(width - MARGIN_RIGHT, height - MARGIN_BOTTOM);
    ctx.stroke();

    ctx.set_font("12px sans-serif");
    for (i, (datum, rect)) in data.iter().zip(bar_layout(data, width, height)).enumerate() {
        ctx.set_fill_style_str(plugin.color(i));
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        ctx.set_fill_style_str(plugin.label_color);
        let _ = ctx.fill_text(&datum.label, rect.x, height - MARGIN_BOTTOM + 16.0);
        let _ = ctx.fill_text(&format!("{:.0}", datum.value), rect.x, rect.y - 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let plugin = ChartPlugin::default();
        assert_eq!(plugin.palette.len(), 5);
        assert_eq!(plugin.color(0), "#077ad9");
        assert_eq!(plugin.color(5), plugin.color(0));
        assert_eq!(plugin.background, theme::CARD_BACKGROUND_DARK);
        assert_eq!(plugin.label_color, theme::SECONDARY_TEXT);
    }

    #[test]
    fn test_bar_layout_scales_to_max() {
        let data = vec![
            BarDatum::new("a", 50.0),
            BarDatum::new("b", 100.0),
            BarDatum::new("c", 0.0),
        ];
        let bars = bar_layout(&data, 340.0, 240.0);
        let plot_height = 240.0 - MARGIN_TOP - MARGIN_BOTTOM;

        assert_eq!(bars.len(), 3);
        assert!((bars[1].height - plot_height).abs() < 1e-9);
        assert!((bars[0].height - plot_height / 2.0).abs() < 1e-9);
        assert_eq!(bars[2].height, 0.0);

        // Bars sit on the baseline and do not overlap
        for bar in &bars {
            assert!((bar.y + bar.height - (MARGIN_TOP + plot_height)).abs() < 1e-9);
        }
        assert!(bars[0].x + bars[0].width < bars[1].x);
    }

    #[test]
    fn test_bar_layout_edge_cases() {
        assert!(bar_layout(&[], 300.0, 200.0).is_empty());

        let bars = bar_layout(&[BarDatum::new("neg", -5.0)], 300.0, 200.0);
        assert_eq!(bars[0].height, 0.0);
    }
}
