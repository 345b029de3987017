//! Top navigation bars for the student area and the admin area.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{APP_NAME, CSS_NAV_LINK, CSS_NAV_LINK_ACTIVE};
use crate::dom_utils;
use crate::messages::Message;
use crate::router::Route;

pub const STUDENT_LINKS: [(&str, Route); 4] = [
    ("Início", Route::StudentDashboard),
    ("Meus Treinos", Route::Workouts),
    ("IMC & Progresso", Route::Progress),
    ("Perfil", Route::Profile),
];

pub const ADMIN_LINKS: [(&str, Route); 1] = [("Exercícios", Route::Admin)];

/// The link that should be highlighted for `current`. Workout details count
/// as part of "Meus Treinos".
pub fn is_active(link: &Route, current: &Route) -> bool {
    match (link, current) {
        (Route::Workouts, Route::WorkoutDetail(_)) => true,
        _ => link == current,
    }
}

pub fn render(document: &Document, links: &[(&str, Route)], current: &Route) -> Result<Element, JsValue> {
    let nav = dom_utils::element(document, "nav", "top-nav", None)?;

    let brand = dom_utils::element(document, "a", "brand", Some(APP_NAME))?;
    brand.set_attribute("href", &Route::Home.to_hash())?;
    nav.append_child(&brand)?;

    let list = dom_utils::element(document, "div", "nav-links", None)?;
    for (label, route) in links {
        let class = if is_active(route, current) {
            CSS_NAV_LINK_ACTIVE
        } else {
            CSS_NAV_LINK
        };
        let link = dom_utils::element(document, "a", class, Some(*label))?;
        link.set_attribute("href", &route.to_hash())?;
        list.append_child(&link)?;
    }

    let logout = dom_utils::button(document, CSS_NAV_LINK, "Sair", Message::Logout)?;
    dom_utils::set_test_id(&logout, "logout")?;
    list.append_child(&logout)?;

    nav.append_child(&list)?;
    Ok(nav)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_detail_highlights_workouts() {
        assert!(is_active(&Route::Workouts, &Route::WorkoutDetail(3)));
        assert!(!is_active(&Route::StudentDashboard, &Route::WorkoutDetail(3)));
        assert!(is_active(&Route::Progress, &Route::Progress));
    }
}
