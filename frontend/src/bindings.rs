//! Functions for host pages that embed the journey planner without the rest of the app.

use wasm_bindgen::prelude::*;

use crate::browser::*;
use crate::imports::*;

fn format_error_to_js(err: FormatError) -> JsValue {
    let name = match &err {
        FormatError::InvalidInput(_) => "InvalidInput",
        FormatError::UnknownTimezone(_) => "UnknownTimezone",
    };
    let js_error = js_sys::Error::new(&err.to_string());
    js_error.set_name(name);
    js_error.into()
}

/// Returns `{ stopTime, userTime, showBoth }` for a UTC instant and an optional stop time zone.
#[wasm_bindgen(js_name = formatTimes)]
pub fn format_times_js(utc: &str, stop_time_zone: Option<String>) -> Result<JsValue, JsValue> {
    let times = format_times(&BrowserHost, utc, stop_time_zone.as_deref()).map_err(format_error_to_js)?;
    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("stopTime"), &JsValue::from_str(&times.stop_time))?;
    Reflect::set(&result, &JsValue::from_str("userTime"), &JsValue::from_str(&times.user_time))?;
    Reflect::set(&result, &JsValue::from_str("showBoth"), &JsValue::from_bool(times.show_both))?;
    Ok(result.into())
}

/// Mounts the widget into `parent`. Exceptions thrown by the widget reach the caller.
#[wasm_bindgen(js_name = createTransitousWidget)]
pub fn create_transitous_widget(
    parent: Element,
    start: Option<String>,
    destination: Option<String>,
) -> Result<(), JsValue> {
    let runtime = BrowserWidgetRuntime::from_window()?;
    launch_widget(&runtime, &parent, start.as_deref(), destination.as_deref())
}
