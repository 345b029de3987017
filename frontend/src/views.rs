// frontend/src/views.rs
//
// Picks the page for the current route and mounts it into
// `#app-container`. Every render is a full rebuild from `APP_STATE`.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{modal, route_guard};
use crate::constants::ID_APP_CONTAINER;
use crate::dom_utils;
use crate::pages;
use crate::router::Route;
use crate::state::{AppState, APP_STATE};

/// `#app-container`, created under `<body>` on first use.
pub fn ensure_app_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(ID_APP_CONTAINER) {
        return Ok(el);
    }
    let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;
    let container = dom_utils::element(document, "div", "", None)?;
    container.set_id(ID_APP_CONTAINER);
    body.append_child(&container)?;
    Ok(container)
}

// Route -> page element
fn render_page(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    if !state.page_visible() {
        return route_guard::render_loading(document);
    }
    match &state.route {
        Route::Home => pages::home::render(document, state),
        Route::Login | Route::Register => pages::login::render(document, state),
        Route::Unauthorized => pages::unauthorized::render(document, state),
        Route::Admin => pages::admin::render(document, state),
        Route::StudentDashboard => pages::student_dashboard::render(document, state),
        Route::Workouts => pages::workouts::render(document, state),
        Route::WorkoutDetail(_) => pages::workout_detail::render(document, state),
        Route::Progress => pages::progress::render(document, state),
        Route::Profile => pages::profile::render(document, state),
    }
}

/// Rebuild the whole page from the current state, keeping keyboard focus
/// on the field the user was typing in.
pub fn render_current() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
    let container = ensure_app_container(&document)?;

    let focus = dom_utils::capture_focus(&document);
    dom_utils::release_page_listeners();
    container.set_inner_html("");

    APP_STATE.with(|state| -> Result<(), JsValue> {
        let state = state.borrow();
        let page = render_page(&document, &state)?;
        container.append_child(&page)?;

        if state.page_visible() {
            if let Some(pending) = &state.pending_deletion {
                modal::confirm_deletion(&document, &container, pending, state.busy)?;
            }
        }
        Ok(())
    })?;

    dom_utils::restore_focus(&document, focus);
    Ok(())
}
