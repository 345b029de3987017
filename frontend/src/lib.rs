use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[macro_use]
mod macros;

pub mod auth;
pub mod constants;
pub mod error;
pub mod filters;
pub mod forms;
pub mod messages; // Message / Command enums
pub mod metrics;
pub mod models;
pub mod network;
pub mod reducers;
pub mod router;
pub mod state;
pub mod update;
pub mod utils;

mod command_executors;
mod components;
mod dom_utils;
mod pages;
mod storage;
mod toast;
mod views;

#[cfg(test)]
mod test_support;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
    views::ensure_app_container(&document)?;

    // Every hash change remounts the matching page.
    let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state::dispatch_global_message(messages::Message::RouteChanged(router::current_route()));
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;
    on_hash_change.forget();

    debug_log!("{} starting on {:?}", constants::APP_NAME, router::current_route());
    state::dispatch_global_message(messages::Message::RouteChanged(router::current_route()));

    Ok(())
}
