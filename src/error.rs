//! Setup failures surfaced to the host.
//!
//! Sizing, drag tracking and camera math never fail. Everything here comes
//! from wiring the controller into a page: a missing global, a DOM call that
//! rejected, or a configuration the host got wrong.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,
    /// A DOM call rejected. Holds the debug rendering of the thrown value.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The console logger could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
    /// The configuration JSON could not be parsed.
    #[error("invalid viewport config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// A configuration field is out of range.
    #[error("invalid viewport config: {field} {reason}")]
    ConfigValue { field: &'static str, reason: &'static str },
}

impl From<JsValue> for ViewportError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

impl From<ViewportError> for JsValue {
    fn from(err: ViewportError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
