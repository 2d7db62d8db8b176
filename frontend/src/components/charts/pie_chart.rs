use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;
use shared::{format_currency, CategoryTotals};
use yew::prelude::*;

use super::palette::slice_color;
use super::{chart_error, ChartArea, ChartHandle};
use crate::services::Logger;

const LEGEND_COLUMNS: usize = 2;
const LEGEND_ROW_HEIGHT: u32 = 24;

/// One wedge of the pie, angles in radians measured clockwise from 3 o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub amount: f64,
    pub start: f64,
    pub sweep: f64,
    pub color_index: usize,
}

/// Slices for every category with a non-negative total, starting at 12 o'clock.
/// A zero total keeps its legend entry with an empty sweep. Negative totals
/// cannot be drawn as a wedge and are left out.
pub fn pie_slices(totals: &CategoryTotals) -> Vec<PieSlice> {
    let drawable: Vec<_> = totals.iter().filter(|total| total.amount >= 0.0).collect();
    let sum = drawable.iter().fold(0.0, |sum, total| sum + total.amount);

    let mut start = -FRAC_PI_2;
    drawable
        .into_iter()
        .enumerate()
        .map(|(index, total)| {
            let sweep = if sum > 0.0 { total.amount / sum * TAU } else { 0.0 };
            let slice = PieSlice {
                category: total.category.clone(),
                amount: total.amount,
                start,
                sweep,
                color_index: index,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Closed wedge outline: the centre followed by points along the arc
pub fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep.to_degrees() / 2.0).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

fn draw_pie(root: &ChartArea, slices: &[PieSlice]) -> Result<(), String> {
    if slices.iter().all(|slice| slice.sweep <= 0.0) {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let rows = slices.len().div_ceil(LEGEND_COLUMNS) as u32;
    let legend_height = (rows * LEGEND_ROW_HEIGHT + 12).min(height / 2);
    let (pie_area, legend_area) = root.split_vertically(height - legend_height);

    let (pie_width, pie_height) = pie_area.dim_in_pixel();
    let center = ((pie_width / 2) as i32, (pie_height / 2) as i32);
    let radius = pie_width.min(pie_height) as f64 / 2.0 - 12.0;

    for slice in slices.iter().filter(|slice| slice.sweep > 0.0) {
        pie_area
            .draw(&Polygon::new(
                wedge_points(center, radius, slice.start, slice.sweep),
                slice_color(slice.color_index).filled(),
            ))
            .map_err(chart_error)?;
    }

    let column_width = (width / LEGEND_COLUMNS as u32) as i32;
    for (index, slice) in slices.iter().enumerate() {
        let x = (index % LEGEND_COLUMNS) as i32 * column_width + 16;
        let y = (index / LEGEND_COLUMNS) as i32 * LEGEND_ROW_HEIGHT as i32 + 6;

        legend_area
            .draw(&Rectangle::new([(x, y), (x + 14, y + 14)], slice_color(slice.color_index).filled()))
            .map_err(chart_error)?;
        legend_area
            .draw(&Text::new(
                format!("{} ({})", slice.category, format_currency(slice.amount)),
                (x + 22, y),
                ("sans-serif", 14).into_font(),
            ))
            .map_err(chart_error)?;
    }

    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub totals: CategoryTotals,
}

/// Spending per category for the active period
pub struct PieChart {
    canvas_ref: NodeRef,
    handle: Option<ChartHandle>,
}

impl Component for PieChart {
    type Message = ();
    type Properties = PieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            handle: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let has_data = ctx.props().totals.iter().any(|total| total.amount > 0.0);

        html! {
            <div class="chart-container">
                <canvas ref={self.canvas_ref.clone()} class="chart-canvas" width="480" height="420"></canvas>
                {if has_data {
                    html! {}
                } else {
                    html! { <p class="chart-empty">{"No expenses for this period"}</p> }
                }}
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.handle.is_none() {
            self.handle = ChartHandle::attach(&self.canvas_ref);
        }

        if let Some(handle) = &self.handle {
            let slices = pie_slices(&ctx.props().totals);
            if let Err(e) = handle.render(|root| draw_pie(root, &slices)) {
                Logger::error_with_component("pie_chart", &e);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(handle) = self.handle.take() {
            handle.dispose();
        }
    }
}
