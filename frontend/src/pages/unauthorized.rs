use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD};
use crate::dom_utils;
use crate::router::Route;
use crate::state::AppState;

pub fn render(document: &Document, _state: &AppState) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "div", &format!("{} centered-card", CSS_CARD), None)?;
    dom_utils::append(&card, dom_utils::element(document, "h1", "", Some("Acesso Negado"))?)?;
    dom_utils::append(&card, dom_utils::element(
        document,
        "p",
        "muted",
        Some("Você não tem permissão para acessar esta página."),
    )?)?;

    let actions = dom_utils::element(document, "div", "actions-row", None)?;
    let login = dom_utils::element(document, "a", CSS_BTN_PRIMARY, Some("Fazer Login"))?;
    login.set_attribute("href", &Route::Login.to_hash())?;
    let home = dom_utils::element(document, "a", CSS_BTN_OUTLINE, Some("Voltar ao Início"))?;
    home.set_attribute("href", &Route::Home.to_hash())?;
    actions.append_child(&login)?;
    actions.append_child(&home)?;
    card.append_child(&actions)?;

    Ok(card)
}
