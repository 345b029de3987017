//! Card summarising one workout, used on the dashboard and the workouts list.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_ACTIONS_ROW, CSS_BADGE, CSS_BTN_DANGER, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD};
use crate::dom_utils;
use crate::messages::{Message, PendingDeletion};
use crate::models::Workout;
use crate::router::Route;

/// `"3 exercícios"`, `"1 exercício"`.
pub fn exercise_count_label(count: usize) -> String {
    if count == 1 {
        "1 exercício".to_string()
    } else {
        format!("{} exercícios", count)
    }
}

/// Card for `workout`. `editable` adds the edit / delete buttons.
pub fn render(document: &Document, workout: &Workout, editable: bool) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "article", &format!("{} workout-card", CSS_CARD), None)?;
    dom_utils::set_test_id(&card, &format!("workout-{}", workout.id))?;

    let header = dom_utils::element(document, "div", "card-header", None)?;
    dom_utils::append(&header, dom_utils::element(document, "h3", "", Some(&workout.name))?)?;
    if !workout.category.is_empty() {
        dom_utils::append(&header, dom_utils::element(document, "span", CSS_BADGE, Some(&workout.category))?)?;
    }
    card.append_child(&header)?;

    if !workout.description.is_empty() {
        dom_utils::append(&card, dom_utils::element(document, "p", "muted", Some(&workout.description))?)?;
    }

    let meta = dom_utils::element(document, "div", "card-meta", None)?;
    dom_utils::append(&meta, dom_utils::element(
        document,
        "span",
        "",
        Some(&format!("{} séries", workout.series)),
    )?)?;
    dom_utils::append(&meta, dom_utils::element(
        document,
        "span",
        "",
        Some(&exercise_count_label(workout.exercises.len())),
    )?)?;
    card.append_child(&meta)?;

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    let details = dom_utils::element(document, "a", CSS_BTN_PRIMARY, Some("Ver Detalhes"))?;
    details.set_attribute("href", &Route::WorkoutDetail(workout.id).to_hash())?;
    actions.append_child(&details)?;

    if editable {
        dom_utils::append(&actions, dom_utils::button(
            document,
            CSS_BTN_OUTLINE,
            "Editar",
            Message::OpenWorkoutDialog(Some(workout.id)),
        )?)?;
        dom_utils::append(&actions, dom_utils::button(
            document,
            CSS_BTN_DANGER,
            "Excluir",
            Message::RequestDeletion(PendingDeletion::Workout {
                id: workout.id,
                name: workout.name.clone(),
            }),
        )?)?;
    }
    card.append_child(&actions)?;

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralises() {
        assert_eq!(exercise_count_label(0), "0 exercícios");
        assert_eq!(exercise_count_label(1), "1 exercício");
        assert_eq!(exercise_count_label(4), "4 exercícios");
    }
}
