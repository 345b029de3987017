// frontend/src/pages/login.rs
//
// Login / registration card. One form, two modes.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{APP_NAME, ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_BTN_PRIMARY, CSS_CARD, CSS_SPINNER};
use crate::dom_utils;
use crate::messages::{AuthField, AuthMode, Message};
use crate::router::Route;
use crate::state::AppState;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let form_state = &state.auth_form;
    let registering = form_state.mode == AuthMode::Register;

    let card = dom_utils::element(document, "div", &format!("{} auth-card", CSS_CARD), None)?;
    dom_utils::append(&card, dom_utils::element(document, "h1", "brand", Some(APP_NAME))?)?;
    dom_utils::append(&card, dom_utils::element(
        document,
        "p",
        "muted",
        Some(if registering {
            "Crie sua conta de aluno"
        } else {
            "Entre com seu e-mail e senha"
        }),
    )?)?;

    let form = dom_utils::element(document, "form", "auth-form", None)?;
    dom_utils::on_submit(&form, Message::SubmitAuthForm)?;

    if registering {
        dom_utils::append(&form, dom_utils::labeled_input(
            document,
            "auth-name",
            "Nome Completo",
            "text",
            &form_state.name,
            |v| Message::UpdateAuthField(AuthField::Name, v),
        )?)?;
    }
    dom_utils::append(&form, dom_utils::labeled_input(
        document,
        "auth-email",
        "Email",
        "email",
        &form_state.email,
        |v| Message::UpdateAuthField(AuthField::Email, v),
    )?)?;
    dom_utils::append(&form, dom_utils::labeled_input(
        document,
        "auth-password",
        "Senha",
        "password",
        &form_state.password,
        |v| Message::UpdateAuthField(AuthField::Password, v),
    )?)?;
    if registering {
        dom_utils::append(&form, dom_utils::labeled_input(
            document,
            "auth-confirm",
            "Repetir Senha",
            "password",
            &form_state.confirm,
            |v| Message::UpdateAuthField(AuthField::Confirm, v),
        )?)?;
    }

    let submit = dom_utils::element(document, "button", CSS_BTN_PRIMARY, None)?;
    submit.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    dom_utils::set_test_id(&submit, "auth-submit")?;
    if state.busy {
        dom_utils::append(&submit, dom_utils::element(document, "span", CSS_SPINNER, None)?)?;
        dom_utils::set_disabled(&submit, true)?;
    } else {
        submit.set_text_content(Some(if registering { "Cadastrar" } else { "Entrar" }));
    }
    form.append_child(&submit)?;
    card.append_child(&form)?;

    // Mode switch is a plain link so the URL reflects the form shown.
    let switch = dom_utils::element(document, "p", "auth-switch", None)?;
    let (question, label, target) = if registering {
        ("Já tem uma conta?", "Entrar", Route::Login)
    } else {
        ("Não tem conta?", "Cadastre-se", Route::Register)
    };
    dom_utils::append(&switch, dom_utils::element(document, "span", "", Some(question))?)?;
    let link = dom_utils::element(document, "a", "", Some(label))?;
    link.set_attribute("href", &target.to_hash())?;
    switch.append_child(&link)?;
    card.append_child(&switch)?;

    Ok(card)
}
