//! Host credential resolution.
//!
//! A WASM bundle has no process environment, so "environment" means the
//! environment of the bundle: a `window.OPENAI_API_KEY` global injected by
//! the hosting page, falling back to a compile-time capture of the same
//! variable from the build environment.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use coach_types::config::API_KEY_VAR;

/// Resolve the completion API credential, or `None` if the host supplies
/// nothing usable. The caller turns `None` into a fatal config error.
pub fn api_key_from_host() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = Reflect::get(&window, &JsValue::from_str(API_KEY_VAR)) {
            if let Some(key) = value.as_string() {
                if !key.trim().is_empty() {
                    log::info!("API credential resolved from hosting page");
                    return Some(key);
                }
            }
        }
    }

    let baked = option_env!("OPENAI_API_KEY");
    match baked {
        Some(key) if !key.trim().is_empty() => {
            log::info!("API credential resolved from build environment");
            Some(key.to_string())
        }
        _ => None,
    }
}
