//! Placeholder rendered in place of a guarded page until `/me` answers.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_SPINNER, ID_GUARD_LOADING};
use crate::dom_utils;

pub fn render_loading(document: &Document) -> Result<Element, JsValue> {
    let wrap = dom_utils::element(document, "div", "guard-loading", None)?;
    wrap.set_id(ID_GUARD_LOADING);
    wrap.set_attribute("aria-busy", "true")?;
    dom_utils::append(&wrap, dom_utils::element(document, "span", CSS_SPINNER, None)?)?;
    dom_utils::append(&wrap, dom_utils::element(document, "p", "", Some("Verificando sessão..."))?)?;
    Ok(wrap)
}
