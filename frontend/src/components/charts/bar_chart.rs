use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use shared::Comparison;
use yew::prelude::*;

use super::palette::series_colors;
use super::{chart_error, ChartArea, ChartHandle};
use crate::services::Logger;

const BAR_WIDTH: f64 = 0.4;
const BAR_GAP: f64 = 0.1;

/// Horizontal extent of one bar: category `category` occupies `[i, i + 1)`
/// and its two series sit side by side inside that slot.
pub fn bar_span(category: usize, series: usize) -> (f64, f64) {
    let left = category as f64 + BAR_GAP + series as f64 * BAR_WIDTH;
    (left, left + BAR_WIDTH)
}

/// Value axis bounds, always including zero, with headroom above the
/// tallest bar (and below the deepest negative one)
pub fn value_range<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)));

    if min == 0.0 && max == 0.0 {
        return (0.0, 1.0);
    }

    let padding = (max - min) * 0.1;
    let low = if min < 0.0 { min - padding } else { 0.0 };
    (low, max + padding)
}

fn draw_bars(root: &ChartArea, comparison: &Comparison) -> Result<(), String> {
    let slots = comparison.categories.len().max(1) as f64;
    let (y_min, y_max) = value_range(
        comparison
            .first
            .values
            .iter()
            .chain(comparison.second.values.iter())
            .copied(),
    );

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..slots, y_min..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| format!("₹{:.0}", v))
        .label_style(("sans-serif", 12))
        .bold_line_style(&RGBColor(235, 235, 235))
        .light_line_style(&RGBColor(248, 248, 248))
        .draw()
        .map_err(chart_error)?;

    for (series_index, (series, color)) in [&comparison.first, &comparison.second]
        .into_iter()
        .zip(series_colors(comparison.kind))
        .enumerate()
    {
        chart
            .draw_series(series.values.iter().enumerate().map(move |(category, value)| {
                let (left, right) = bar_span(category, series_index);
                Rectangle::new([(left, 0.0), (right, *value)], color.filled())
            }))
            .map_err(chart_error)?
            .label(series.label.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&RGBColor(200, 200, 200))
        .draw()
        .map_err(chart_error)?;

    let label_style = TextStyle::from(("sans-serif", 13).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for (index, category) in comparison.categories.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(index as f64 + 0.5, y_min));
        root.draw(&Text::new(category.clone(), (x, y + 8), label_style.clone()))
            .map_err(chart_error)?;
    }

    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub comparison: Comparison,
}

/// Grouped bars: one series per compared period over a shared category axis
pub struct BarChart {
    canvas_ref: NodeRef,
    handle: Option<ChartHandle>,
}

impl Component for BarChart {
    type Message = ();
    type Properties = BarChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            handle: None,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container">
                <canvas ref={self.canvas_ref.clone()} class="chart-canvas" width="640" height="360"></canvas>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.handle.is_none() {
            self.handle = ChartHandle::attach(&self.canvas_ref);
        }

        if let Some(handle) = &self.handle {
            if let Err(e) = handle.render(|root| draw_bars(root, &ctx.props().comparison)) {
                Logger::error_with_component("bar_chart", &e);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(handle) = self.handle.take() {
            handle.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_span(actual: (f64, f64), expected: (f64, f64)) {
        assert!((actual.0 - expected.0).abs() < 1e-12, "{:?} != {:?}", actual, expected);
        assert!((actual.1 - expected.1).abs() < 1e-12, "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn test_bars_sit_side_by_side_inside_their_slot() {
        assert_span(bar_span(0, 0), (0.1, 0.5));
        assert_span(bar_span(0, 1), (0.5, 0.9));
        assert_span(bar_span(2, 1), (2.5, 2.9));
    }

    #[test]
    fn test_value_range_starts_at_zero() {
        let (low, high) = value_range([150.0, 30.0, 0.0]);
        assert_eq!(low, 0.0);
        assert!((high - 165.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_extends_below_zero_for_refunds() {
        let (low, high) = value_range([100.0, -50.0]);
        assert!((low + 65.0).abs() < 1e-9);
        assert!((high - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_for_no_spending() {
        assert_eq!(value_range(Vec::new()), (0.0, 1.0));
        assert_eq!(value_range([0.0, 0.0]), (0.0, 1.0));
    }
}
