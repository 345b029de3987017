//! One module per route. Every page exposes
//! `render(document, state) -> Result<Element, JsValue>`; `views` picks the
//! page and mounts the returned element into `#app-container`.

pub mod admin;
pub mod home;
pub mod login;
pub mod profile;
pub mod progress;
pub mod student_dashboard;
pub mod unauthorized;
pub mod workout_detail;
pub mod workouts;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::nav;
use crate::constants::{CSS_EMPTY_STATE, CSS_SPINNER};
use crate::dom_utils;
use crate::state::AppState;

/// Nav bar + `<main>`; returns `(shell, main)` so the page fills `main`.
fn shell(document: &Document, state: &AppState, links: &[(&str, crate::router::Route)]) -> Result<(Element, Element), JsValue> {
    let shell = dom_utils::element(document, "div", "page-shell", None)?;
    dom_utils::append(&shell, nav::render(document, links, &state.route)?)?;
    let main = dom_utils::element(document, "main", "page-main", None)?;
    shell.append_child(&main)?;
    Ok((shell, main))
}

pub(crate) fn student_shell(document: &Document, state: &AppState) -> Result<(Element, Element), JsValue> {
    shell(document, state, &nav::STUDENT_LINKS)
}

pub(crate) fn admin_shell(document: &Document, state: &AppState) -> Result<(Element, Element), JsValue> {
    shell(document, state, &nav::ADMIN_LINKS)
}

/// `<header>` with a title and an optional subtitle.
pub(crate) fn page_header(document: &Document, title: &str, subtitle: Option<&str>) -> Result<Element, JsValue> {
    let header = dom_utils::element(document, "header", "page-header", None)?;
    dom_utils::append(&header, dom_utils::element(document, "h1", "", Some(title))?)?;
    if let Some(sub) = subtitle {
        dom_utils::append(&header, dom_utils::element(document, "p", "muted", Some(sub))?)?;
    }
    Ok(header)
}

pub(crate) fn loading(document: &Document, text: &str) -> Result<Element, JsValue> {
    let wrap = dom_utils::element(document, "div", CSS_EMPTY_STATE, None)?;
    dom_utils::append(&wrap, dom_utils::element(document, "span", CSS_SPINNER, None)?)?;
    dom_utils::append(&wrap, dom_utils::element(document, "p", "", Some(text))?)?;
    Ok(wrap)
}
