// frontend/src/pages/workouts.rs
//
// "Meus Treinos": search, category filter and the create/edit dialog.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{modal, workout_card};
use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_ACTIONS_ROW, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_EMPTY_STATE,
    CSS_FORM_ROW, ID_WORKOUT_MODAL,
};
use crate::dom_utils;
use crate::filters::{filter_workouts, workout_categories};
use crate::forms::WorkoutForm;
use crate::messages::{Message, WorkoutField};
use crate::models::Exercise;
use crate::state::AppState;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::student_shell(document, state)?;
    dom_utils::append(&main, super::page_header(
        document,
        "Meus Treinos",
        Some("Organize seus treinos e exercícios"),
    )?)?;

    let Some(student) = &state.student else {
        dom_utils::append(&main, super::loading(document, "Carregando treinos...")?)?;
        return Ok(shell);
    };

    let toolbar = dom_utils::element(document, "div", "toolbar", None)?;
    dom_utils::append(&toolbar, dom_utils::labeled_input(
        document,
        "workout-search",
        "Buscar",
        "search",
        &state.workout_search,
        Message::SetWorkoutSearch,
    )?)?;
    dom_utils::append(&toolbar, category_select(
        document,
        &workout_categories(&student.workouts),
        &state.workout_category,
    )?)?;
    let create = dom_utils::button(document, CSS_BTN_PRIMARY, "Novo Treino", Message::OpenWorkoutDialog(None))?;
    dom_utils::set_test_id(&create, "new-workout")?;
    toolbar.append_child(&create)?;
    main.append_child(&toolbar)?;

    let visible = filter_workouts(&student.workouts, &state.workout_search, &state.workout_category);
    if visible.is_empty() {
        let text = if student.workouts.is_empty() {
            "Você ainda não tem treinos. Crie o primeiro!"
        } else {
            "Nenhum treino encontrado."
        };
        dom_utils::append(&main, dom_utils::element(document, "p", CSS_EMPTY_STATE, Some(text))?)?;
    } else {
        let grid = dom_utils::element(document, "div", "card-grid", None)?;
        for workout in visible {
            dom_utils::append(&grid, workout_card::render(document, workout, true)?)?;
        }
        main.append_child(&grid)?;
    }

    if let Some(form) = &state.workout_dialog {
        workout_dialog(document, &shell, form, &state.exercises, state.busy)?;
    }

    Ok(shell)
}

fn category_select(document: &Document, categories: &[String], selected: &str) -> Result<Element, JsValue> {
    let row = dom_utils::element(document, "div", CSS_FORM_ROW, None)?;
    let label = dom_utils::element(document, "label", "", Some("Categoria"))?;
    label.set_attribute("for", "workout-category")?;
    row.append_child(&label)?;

    let select = dom_utils::element(document, "select", "", None)?;
    select.set_id("workout-category");
    for (i, category) in categories.iter().enumerate() {
        let option = dom_utils::element(document, "option", "", Some(category))?;
        option.set_attribute("value", category)?;
        let is_selected = if selected.is_empty() { i == 0 } else { category == selected };
        if is_selected {
            option.set_attribute("selected", "")?;
        }
        select.append_child(&option)?;
    }
    dom_utils::on_value(&select, "change", Message::SetWorkoutCategory)?;
    row.append_child(&select)?;
    Ok(row)
}

fn exercise_checklist(document: &Document, catalog: &[Exercise], chosen: &[u32]) -> Result<Element, JsValue> {
    let fieldset = dom_utils::element(document, "fieldset", "exercise-checklist", None)?;
    dom_utils::append(&fieldset, dom_utils::element(document, "legend", "", Some("Exercícios"))?)?;

    if catalog.is_empty() {
        dom_utils::append(&fieldset, dom_utils::element(
            document,
            "p",
            "muted",
            Some("Nenhum exercício disponível."),
        )?)?;
        return Ok(fieldset);
    }

    for exercise in catalog {
        let id = exercise.id;
        let item = dom_utils::element(document, "label", "check-row", None)?;
        let checkbox = document.create_element("input")?;
        checkbox.set_attribute(ATTR_TYPE, "checkbox")?;
        checkbox.set_id(&format!("workout-exercise-{}", id));
        if chosen.contains(&id) {
            checkbox.set_attribute("checked", "")?;
        }
        dom_utils::on_value(&checkbox, "change", move |_| Message::ToggleWorkoutExercise(id))?;
        item.append_child(&checkbox)?;
        dom_utils::append(&item, dom_utils::element(
            document,
            "span",
            "",
            Some(&format!("{} ({} reps)", exercise.name, exercise.repetitions)),
        )?)?;
        fieldset.append_child(&item)?;
    }
    Ok(fieldset)
}

fn workout_dialog(
    document: &Document,
    parent: &Element,
    form: &WorkoutForm,
    catalog: &[Exercise],
    busy: bool,
) -> Result<(), JsValue> {
    let title = if form.editing.is_some() { "Editar Treino" } else { "Novo Treino" };
    let (backdrop, content) = modal::ensure_modal(document, parent, ID_WORKOUT_MODAL, title)?;

    let form_el = dom_utils::element(document, "form", "modal-form", None)?;
    dom_utils::on_submit(&form_el, Message::SubmitWorkoutForm)?;
    dom_utils::append(&form_el, dom_utils::labeled_input(
        document,
        "workout-name",
        "Nome do Treino",
        "text",
        &form.name,
        |v| Message::UpdateWorkoutField(WorkoutField::Name, v),
    )?)?;
    dom_utils::append(&form_el, dom_utils::labeled_textarea(
        document,
        "workout-description",
        "Descrição",
        &form.description,
        |v| Message::UpdateWorkoutField(WorkoutField::Description, v),
    )?)?;
    dom_utils::append(&form_el, dom_utils::labeled_input(
        document,
        "workout-category-input",
        "Categoria",
        "text",
        &form.category,
        |v| Message::UpdateWorkoutField(WorkoutField::Category, v),
    )?)?;
    dom_utils::append(&form_el, dom_utils::labeled_input(
        document,
        "workout-series",
        "Séries",
        "number",
        &form.series,
        |v| Message::UpdateWorkoutField(WorkoutField::Series, v),
    )?)?;
    dom_utils::append(&form_el, exercise_checklist(document, catalog, &form.exercise_ids)?)?;

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    dom_utils::append(&actions, dom_utils::button(
        document,
        CSS_BTN_OUTLINE,
        "Cancelar",
        Message::CloseWorkoutDialog,
    )?)?;
    let save = dom_utils::element(document, "button", CSS_BTN_PRIMARY, Some(if busy { "Salvando..." } else { "Salvar" }))?;
    save.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    dom_utils::set_disabled(&save, busy)?;
    actions.append_child(&save)?;
    form_el.append_child(&actions)?;
    content.append_child(&form_el)?;

    modal::show(&backdrop);
    Ok(())
}
