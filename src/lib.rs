#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod auth;
pub mod config;
pub mod profile;

/// Reads the host-page injection point `window.__PORTFOLIO_DATA__` once at
/// startup. Accepts either a JSON string or a plain object; anything
/// malformed is logged and dropped so the app boots into the upload flow.
#[cfg(feature = "hydrate")]
fn injected_profile() -> Option<crate::profile::UploadResponse> {
    let raw = js_sys::Reflect::get(
        &leptos::prelude::window(),
        &wasm_bindgen::JsValue::from_str("__PORTFOLIO_DATA__"),
    )
    .ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }

    let text = raw
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&raw).ok().map(String::from))?;
    match serde_json::from_str(&text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!("ignoring malformed injected profile: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let bootstrap = injected_profile();
    leptos::mount::hydrate_body(move || leptos::view! { <App bootstrap=bootstrap /> });
}
