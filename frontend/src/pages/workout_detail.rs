use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::workout_card::exercise_count_label;
use crate::constants::{CSS_BADGE, CSS_BTN_OUTLINE, CSS_CARD, CSS_EMPTY_STATE};
use crate::dom_utils;
use crate::models::Workout;
use crate::router::Route;
use crate::state::{AppState, WorkoutDetail};

fn back_link(document: &Document) -> Result<Element, JsValue> {
    let back = dom_utils::element(document, "a", CSS_BTN_OUTLINE, Some("Voltar para Meus Treinos"))?;
    back.set_attribute("href", &Route::Workouts.to_hash())?;
    Ok(back)
}

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::student_shell(document, state)?;

    match &state.workout_detail {
        WorkoutDetail::Loading => {
            dom_utils::append(&main, super::loading(document, "Carregando treino...")?)?;
        }
        WorkoutDetail::NotFound => {
            let card = dom_utils::element(document, "div", &format!("{} centered-card", CSS_CARD), None)?;
            dom_utils::append(&card, dom_utils::element(document, "h2", "", Some("Treino não encontrado"))?)?;
            dom_utils::append(&card, dom_utils::element(
                document,
                "p",
                "muted",
                Some("O treino que você está procurando não existe."),
            )?)?;
            dom_utils::append(&card, back_link(document)?)?;
            main.append_child(&card)?;
        }
        WorkoutDetail::Loaded(workout) => {
            dom_utils::append(&main, back_link(document)?)?;
            dom_utils::append(&main, detail(document, workout)?)?;
        }
    }

    Ok(shell)
}

fn detail(document: &Document, workout: &Workout) -> Result<Element, JsValue> {
    let section = dom_utils::element(document, "section", "workout-detail", None)?;

    let header = dom_utils::element(document, "header", "page-header", None)?;
    dom_utils::append(&header, dom_utils::element(document, "h1", "", Some(&workout.name))?)?;
    if !workout.category.is_empty() {
        dom_utils::append(&header, dom_utils::element(document, "span", CSS_BADGE, Some(&workout.category))?)?;
    }
    if !workout.description.is_empty() {
        dom_utils::append(&header, dom_utils::element(document, "p", "muted", Some(&workout.description))?)?;
    }
    section.append_child(&header)?;

    let summary = dom_utils::element(document, "div", "card-meta", None)?;
    dom_utils::append(&summary, dom_utils::element(
        document,
        "span",
        "",
        Some(&format!("{} séries", workout.series)),
    )?)?;
    dom_utils::append(&summary, dom_utils::element(
        document,
        "span",
        "",
        Some(&exercise_count_label(workout.exercises.len())),
    )?)?;
    section.append_child(&summary)?;

    if workout.exercises.is_empty() {
        dom_utils::append(&section, dom_utils::element(
            document,
            "p",
            CSS_EMPTY_STATE,
            Some("Este treino ainda não tem exercícios."),
        )?)?;
        return Ok(section);
    }

    let list = dom_utils::element(document, "ol", "exercise-steps", None)?;
    for (i, exercise) in workout.exercises.iter().enumerate() {
        let item = dom_utils::element(document, "li", CSS_CARD, None)?;
        dom_utils::append(&item, dom_utils::element(document, "span", "step-number", Some(&(i + 1).to_string()))?)?;
        let body = dom_utils::element(document, "div", "", None)?;
        dom_utils::append(&body, dom_utils::element(document, "h3", "", Some(&exercise.name))?)?;
        dom_utils::append(&body, dom_utils::element(document, "p", "muted", Some(&exercise.description))?)?;
        dom_utils::append(&body, dom_utils::element(
            document,
            "strong",
            "",
            Some(&format!("{} × {}", workout.series, exercise.repetitions)),
        )?)?;
        item.append_child(&body)?;
        list.append_child(&item)?;
    }
    section.append_child(&list)?;

    Ok(section)
}
