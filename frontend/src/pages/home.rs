// frontend/src/pages/home.rs
//
// Static landing page.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{APP_NAME, APP_TAGLINE, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD};
use crate::dom_utils;
use crate::router::Route;
use crate::state::AppState;

const FEATURES: [(&str, &str); 3] = [
    (
        "Treinos Personalizados",
        "Monte treinos com os exercícios do catálogo e acompanhe séries e repetições.",
    ),
    (
        "Acompanhamento de Progresso",
        "Registre seu IMC e veja a evolução em um gráfico dia a dia.",
    ),
    (
        "Praticidade",
        "Tudo no navegador: seus treinos, medidas e perfil em um só lugar.",
    ),
];

fn link(document: &Document, class: &str, label: &str, route: Route) -> Result<Element, JsValue> {
    let a = dom_utils::element(document, "a", class, Some(label))?;
    a.set_attribute("href", &route.to_hash())?;
    Ok(a)
}

pub fn render(document: &Document, _state: &AppState) -> Result<Element, JsValue> {
    let page = dom_utils::element(document, "div", "home-page", None)?;

    let hero = dom_utils::element(document, "section", "hero", None)?;
    dom_utils::append(&hero, dom_utils::element(document, "h1", "", Some(APP_NAME))?)?;
    dom_utils::append(&hero, dom_utils::element(document, "p", "tagline", Some(APP_TAGLINE))?)?;
    let cta = dom_utils::element(document, "div", "actions-row", None)?;
    dom_utils::append(&cta, link(document, CSS_BTN_PRIMARY, "Começar Agora", Route::Register)?)?;
    dom_utils::append(&cta, link(document, CSS_BTN_OUTLINE, "Já tenho conta", Route::Login)?)?;
    hero.append_child(&cta)?;
    page.append_child(&hero)?;

    let features = dom_utils::element(document, "section", "feature-grid", None)?;
    for (title, text) in FEATURES {
        let card = dom_utils::element(document, "div", CSS_CARD, None)?;
        dom_utils::append(&card, dom_utils::element(document, "h3", "", Some(title))?)?;
        dom_utils::append(&card, dom_utils::element(document, "p", "muted", Some(text))?)?;
        features.append_child(&card)?;
    }
    page.append_child(&features)?;

    Ok(page)
}
