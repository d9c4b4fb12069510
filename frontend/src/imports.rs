pub use js_sys::{Array, Function, Object, Reflect};
pub use wasm_bindgen::{JsCast, JsValue};
pub use web_sys::Element;
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub use transitous_shared::constants::*;
pub use transitous_shared::error::*;
pub use transitous_shared::host::*;
pub use transitous_shared::imports::*;
pub use transitous_shared::locale::*;
pub use transitous_shared::time_formatter::*;
pub use transitous_shared::types::*;
pub use transitous_shared::widget::*;
