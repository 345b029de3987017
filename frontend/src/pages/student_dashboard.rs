// frontend/src/pages/student_dashboard.rs
//
// Greeting, three stat cards and the student's workouts.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::workout_card;
use crate::constants::{CSS_BADGE, CSS_BTN_PRIMARY, CSS_CARD, CSS_EMPTY_STATE};
use crate::dom_utils;
use crate::filters::exercise_count;
use crate::metrics::{current_bmi, BmiResult};
use crate::router::Route;
use crate::state::AppState;
use crate::utils::{first_name, format_decimal};

fn stat_card(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "div", &format!("{} stat-card", CSS_CARD), None)?;
    dom_utils::append(&card, dom_utils::element(document, "span", "stat-label", Some(label))?)?;
    dom_utils::append(&card, dom_utils::element(document, "strong", "stat-value", Some(value))?)?;
    Ok(card)
}

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::student_shell(document, state)?;

    let Some(student) = &state.student else {
        dom_utils::append(&main, super::loading(document, "Carregando seus dados...")?)?;
        return Ok(shell);
    };

    dom_utils::append(&main, super::page_header(
        document,
        &format!("Olá, {}!", first_name(&student.name)),
        Some("Bem-vindo de volta ao seu painel de treinos"),
    )?)?;

    let stats = dom_utils::element(document, "section", "stat-grid", None)?;
    dom_utils::append(&stats, stat_card(document, "Treinos", &student.workouts.len().to_string())?)?;
    dom_utils::append(&stats, stat_card(
        document,
        "Exercícios",
        &exercise_count(&student.workouts).to_string(),
    )?)?;

    let bmi_card = match current_bmi(&student.bmi_history) {
        Some(value) => {
            let result = BmiResult::from_value(value);
            let card = stat_card(document, "IMC Atual", &format_decimal(result.value, 1))?;
            dom_utils::append(&card, dom_utils::element(
                document,
                "span",
                &format!("{} {}", CSS_BADGE, result.band.badge_class()),
                Some(result.band.label()),
            )?)?;
            card
        }
        None => stat_card(document, "IMC Atual", "--")?,
    };
    stats.append_child(&bmi_card)?;
    main.append_child(&stats)?;

    let section = dom_utils::element(document, "section", "dashboard-workouts", None)?;
    let heading = dom_utils::element(document, "div", "section-heading", None)?;
    dom_utils::append(&heading, dom_utils::element(document, "h2", "", Some("Meus Treinos"))?)?;
    let manage = dom_utils::element(document, "a", CSS_BTN_PRIMARY, Some("Gerenciar Treinos"))?;
    manage.set_attribute("href", &Route::Workouts.to_hash())?;
    heading.append_child(&manage)?;
    section.append_child(&heading)?;

    if student.workouts.is_empty() {
        dom_utils::append(&section, dom_utils::element(
            document,
            "p",
            CSS_EMPTY_STATE,
            Some("Você ainda não tem treinos cadastrados."),
        )?)?;
    } else {
        let grid = dom_utils::element(document, "div", "card-grid", None)?;
        for workout in &student.workouts {
            dom_utils::append(&grid, workout_card::render(document, workout, false)?)?;
        }
        section.append_child(&grid)?;
    }
    main.append_child(&section)?;

    Ok(shell)
}
