// frontend/src/pages/profile.rs
//
// Student profile: read-only summary, or the edit form while
// `state.profile_form` is set.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_ACTIONS_ROW, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD};
use crate::dom_utils;
use crate::forms::ProfileForm;
use crate::messages::{Message, ProfileField};
use crate::models::Student;
use crate::state::AppState;
use crate::utils::{format_decimal, initials};

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::student_shell(document, state)?;
    dom_utils::append(&main, super::page_header(document, "Meu Perfil", Some("Seus dados pessoais e medidas"))?)?;

    let Some(student) = &state.student else {
        dom_utils::append(&main, super::loading(document, "Carregando perfil...")?)?;
        return Ok(shell);
    };

    let card = dom_utils::element(document, "section", &format!("{} profile-card", CSS_CARD), None)?;
    let identity = dom_utils::element(document, "div", "profile-identity", None)?;
    dom_utils::append(&identity, dom_utils::element(document, "div", "avatar", Some(&initials(&student.name)))?)?;
    dom_utils::append(&identity, dom_utils::element(document, "h2", "", Some(&student.name))?)?;
    dom_utils::append(&identity, dom_utils::element(document, "p", "muted", Some(&student.email))?)?;
    card.append_child(&identity)?;

    match &state.profile_form {
        Some(form) => dom_utils::append(&card, edit_form(document, form, state.busy)?)?,
        None => dom_utils::append(&card, summary(document, student)?)?,
    };
    main.append_child(&card)?;

    Ok(shell)
}

fn summary(document: &Document, student: &Student) -> Result<Element, JsValue> {
    let wrap = dom_utils::element(document, "div", "", None)?;
    let list = dom_utils::element(document, "dl", "profile-fields", None)?;
    let age = if student.age > 0 {
        format!("{} anos", student.age)
    } else {
        "--".to_string()
    };
    let weight = if student.weight_kg > 0.0 {
        format!("{} kg", format_decimal(student.weight_kg, 1))
    } else {
        "--".to_string()
    };
    let height = if student.height_m > 0.0 {
        format!("{} m", format_decimal(student.height_m, 2))
    } else {
        "--".to_string()
    };
    for (term, value) in [
        ("Nome", student.name.as_str()),
        ("Email", student.email.as_str()),
        ("Idade", age.as_str()),
        ("Peso", weight.as_str()),
        ("Altura", height.as_str()),
    ] {
        dom_utils::append(&list, dom_utils::element(document, "dt", "", Some(term))?)?;
        dom_utils::append(&list, dom_utils::element(document, "dd", "", Some(value))?)?;
    }
    wrap.append_child(&list)?;

    let edit = dom_utils::button(document, CSS_BTN_PRIMARY, "Editar Perfil", Message::StartProfileEdit)?;
    dom_utils::set_test_id(&edit, "edit-profile")?;
    wrap.append_child(&edit)?;
    Ok(wrap)
}

fn edit_form(document: &Document, form: &ProfileForm, busy: bool) -> Result<Element, JsValue> {
    let form_el = dom_utils::element(document, "form", "profile-form", None)?;
    dom_utils::on_submit(&form_el, Message::SaveProfile)?;

    let fields: [(&str, &str, &str, &str, ProfileField); 5] = [
        ("profile-name", "Nome", "text", form.name.as_str(), ProfileField::Name),
        ("profile-email", "Email", "email", form.email.as_str(), ProfileField::Email),
        ("profile-age", "Idade", "number", form.age.as_str(), ProfileField::Age),
        ("profile-weight", "Peso (kg)", "number", form.weight.as_str(), ProfileField::Weight),
        ("profile-height", "Altura (m)", "number", form.height.as_str(), ProfileField::Height),
    ];
    for (id, label, input_type, value, field) in fields {
        dom_utils::append(&form_el, dom_utils::labeled_input(document, id, label, input_type, value, move |v| {
            Message::UpdateProfileField(field, v)
        })?)?;
    }

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    dom_utils::append(&actions, dom_utils::button(
        document,
        CSS_BTN_OUTLINE,
        "Cancelar",
        Message::CancelProfileEdit,
    )?)?;
    let save = dom_utils::element(document, "button", CSS_BTN_PRIMARY, Some(if busy { "Salvando..." } else { "Salvar" }))?;
    save.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    dom_utils::set_disabled(&save, busy)?;
    actions.append_child(&save)?;
    form_el.append_child(&actions)?;
    Ok(form_el)
}
