use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{MediaQueryList, Window};

use crate::trail::Viewport;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no browser window available")]
    NoWindow,
    #[error("matchMedia({query}) failed: {detail}")]
    MatchMedia { query: &'static str, detail: String },
    #[error("could not register '{event}' listener: {detail}")]
    Listener { event: &'static str, detail: String },
    #[error("navigation to {href} failed: {detail}")]
    Navigation { href: String, detail: String },
}

pub fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn match_media(window: &Window, query: &'static str) -> Result<MediaQueryList, HostError> {
    match window.match_media(query) {
        Ok(Some(list)) => Ok(list),
        Ok(None) => Err(HostError::MatchMedia {
            query,
            detail: "unsupported".to_string(),
        }),
        Err(err) => Err(HostError::MatchMedia {
            query,
            detail: js_detail(&err),
        }),
    }
}

/// Current inner size of the window; zero if the browser won't say.
pub fn viewport(window: &Window) -> Viewport {
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport {
        width: read(window.inner_width()),
        height: read(window.inner_height()),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Full page load, so the target page reads its input from the address bar.
pub fn navigate_to(href: &str) -> Result<(), HostError> {
    window()?
        .location()
        .assign(href)
        .map_err(|err| HostError::Navigation {
            href: href.to_string(),
            detail: js_detail(&err),
        })
}

pub fn open_in_new_tab(href: &str) -> Result<(), HostError> {
    window()?
        .open_with_url_and_target(href, "_blank")
        .map(|_| ())
        .map_err(|err| HostError::Navigation {
            href: href.to_string(),
            detail: js_detail(&err),
        })
}
