//! Canvas charts drawn with plotters.
//!
//! Each chart component owns a [`ChartHandle`] bound to its canvas. A render
//! always clears whatever the handle drew before, and the component clears
//! it again when it is destroyed.

pub mod bar_chart;
pub mod palette;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use pie_chart::PieChart;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

pub type ChartArea = DrawingArea<CanvasBackend, Shift>;

pub fn chart_error<E: std::fmt::Debug>(error: E) -> String {
    format!("Chart drawing failed: {:?}", error)
}

pub struct ChartHandle {
    canvas: HtmlCanvasElement,
}

impl ChartHandle {
    /// Bind to the canvas behind `canvas_ref`, once it is mounted
    pub fn attach(canvas_ref: &NodeRef) -> Option<Self> {
        canvas_ref.cast::<HtmlCanvasElement>().map(|canvas| Self { canvas })
    }

    /// Clear everything previously drawn on the canvas
    pub fn dispose(&self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

        if let Some(context) = context {
            context.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }

    /// Dispose of the previous drawing, then draw a new one
    pub fn render<F>(&self, draw: F) -> Result<(), String>
    where
        F: FnOnce(&ChartArea) -> Result<(), String>,
    {
        self.dispose();

        let backend = CanvasBackend::with_canvas_object(self.canvas.clone())
            .ok_or_else(|| "Canvas has no 2d context".to_string())?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        draw(&root)?;
        root.present().map_err(chart_error)
    }
}
