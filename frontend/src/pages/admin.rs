// frontend/src/pages/admin.rs
//
// Exercise catalog: search, create, edit and delete.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::modal;
use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_ACTIONS_ROW, CSS_BTN_DANGER, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD,
    CSS_EMPTY_STATE, ID_EXERCISE_MODAL,
};
use crate::dom_utils;
use crate::filters::filter_exercises;
use crate::forms::ExerciseForm;
use crate::messages::{ExerciseField, Message, PendingDeletion};
use crate::models::Exercise;
use crate::state::AppState;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::admin_shell(document, state)?;
    dom_utils::append(&main, super::page_header(
        document,
        "Gerenciar Exercícios",
        Some("Catálogo de exercícios disponível para os treinos"),
    )?)?;

    let toolbar = dom_utils::element(document, "div", "toolbar", None)?;
    dom_utils::append(&toolbar, dom_utils::labeled_input(
        document,
        "exercise-search",
        "Buscar",
        "search",
        &state.exercise_search,
        Message::SetExerciseSearch,
    )?)?;
    let create = dom_utils::button(document, CSS_BTN_PRIMARY, "Novo Exercício", Message::OpenExerciseDialog(None))?;
    dom_utils::set_test_id(&create, "new-exercise")?;
    toolbar.append_child(&create)?;
    main.append_child(&toolbar)?;

    if !state.exercises_loaded {
        dom_utils::append(&main, super::loading(document, "Carregando exercícios...")?)?;
    } else {
        let visible = filter_exercises(&state.exercises, &state.exercise_search);
        if visible.is_empty() {
            dom_utils::append(&main, dom_utils::element(
                document,
                "p",
                CSS_EMPTY_STATE,
                Some("Nenhum exercício encontrado."),
            )?)?;
        } else {
            let list = dom_utils::element(document, "div", "exercise-list", None)?;
            for exercise in visible {
                dom_utils::append(&list, exercise_row(document, exercise)?)?;
            }
            main.append_child(&list)?;
        }
    }

    if let Some(form) = &state.exercise_dialog {
        exercise_dialog(document, &shell, form, state.busy)?;
    }

    Ok(shell)
}

fn exercise_row(document: &Document, exercise: &Exercise) -> Result<Element, JsValue> {
    let row = dom_utils::element(document, "article", &format!("{} exercise-row", CSS_CARD), None)?;
    dom_utils::set_test_id(&row, &format!("exercise-{}", exercise.id))?;

    let body = dom_utils::element(document, "div", "", None)?;
    dom_utils::append(&body, dom_utils::element(document, "h3", "", Some(&exercise.name))?)?;
    dom_utils::append(&body, dom_utils::element(document, "p", "muted", Some(&exercise.description))?)?;
    dom_utils::append(&body, dom_utils::element(
        document,
        "span",
        "",
        Some(&format!("{} repetições", exercise.repetitions)),
    )?)?;
    row.append_child(&body)?;

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    dom_utils::append(&actions, dom_utils::button(
        document,
        CSS_BTN_OUTLINE,
        "Editar",
        Message::OpenExerciseDialog(Some(exercise.id)),
    )?)?;
    dom_utils::append(&actions, dom_utils::button(
        document,
        CSS_BTN_DANGER,
        "Excluir",
        Message::RequestDeletion(PendingDeletion::Exercise {
            id: exercise.id,
            name: exercise.name.clone(),
        }),
    )?)?;
    row.append_child(&actions)?;
    Ok(row)
}

fn exercise_dialog(document: &Document, parent: &Element, form: &ExerciseForm, busy: bool) -> Result<(), JsValue> {
    let title = if form.editing.is_some() {
        "Editar Exercício"
    } else {
        "Novo Exercício"
    };
    let (backdrop, content) = modal::ensure_modal(document, parent, ID_EXERCISE_MODAL, title)?;

    let form_el = dom_utils::element(document, "form", "modal-form", None)?;
    dom_utils::on_submit(&form_el, Message::SubmitExerciseForm)?;
    dom_utils::append(&form_el, dom_utils::labeled_input(
        document,
        "exercise-name",
        "Nome",
        "text",
        &form.name,
        |v| Message::UpdateExerciseField(ExerciseField::Name, v),
    )?)?;
    dom_utils::append(&form_el, dom_utils::labeled_textarea(
        document,
        "exercise-description",
        "Descrição",
        &form.description,
        |v| Message::UpdateExerciseField(ExerciseField::Description, v),
    )?)?;
    dom_utils::append(&form_el, dom_utils::labeled_input(
        document,
        "exercise-repetitions",
        "Repetições",
        "number",
        &form.repetitions,
        |v| Message::UpdateExerciseField(ExerciseField::Repetitions, v),
    )?)?;

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    dom_utils::append(&actions, dom_utils::button(
        document,
        CSS_BTN_OUTLINE,
        "Cancelar",
        Message::CloseExerciseDialog,
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
