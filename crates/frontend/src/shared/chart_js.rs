//! Chart.js adapter.
//!
//! Chart.js is loaded by `index.html` as the global `Chart` constructor. A
//! chart is created with `new Chart(canvas, config)` and released with
//! `chart.destroy()`.

use contracts::dashboards::d001_category_charts::{ChartConfig, DisposableChart};
use contracts::shared::error::DashboardError;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

/// Live Chart.js instance bound to one canvas
pub struct ChartJsHandle {
    chart: JsValue,
}

impl DisposableChart for ChartJsHandle {
    fn dispose(self) {
        if let Err(err) = call_method(&self.chart, "destroy") {
            log::warn!("Failed to destroy chart: {}", describe_js_error(&err));
        }
    }
}

/// Draws `config` into the canvas with the given DOM id
pub fn render_chart(canvas_id: &str, config: &ChartConfig) -> Result<ChartJsHandle, DashboardError> {
    let window =
        web_sys::window().ok_or_else(|| DashboardError::processing("window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| DashboardError::processing("document not available"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| DashboardError::processing(format!("canvas {} not found", canvas_id)))?;

    let constructor = Reflect::get(&window, &JsValue::from_str("Chart")).map_err(js_error)?;
    if !constructor.is_function() {
        return Err(DashboardError::processing("Chart.js is not loaded"));
    }
    let constructor: Function = constructor.dyn_into().map_err(js_error)?;

    let config_value = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| DashboardError::processing(err.to_string()))?;

    let args = Array::of2(&canvas, &config_value);
    let chart = Reflect::construct(&constructor, &args).map_err(js_error)?;
    Ok(ChartJsHandle { chart })
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call0(target)
}

fn js_error(err: JsValue) -> DashboardError {
    DashboardError::processing(describe_js_error(&err))
}

/// Best-effort message of a thrown JS value
fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
