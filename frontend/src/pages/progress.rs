// frontend/src/pages/progress.rs
//
// BMI calculation, measurement updates, the daily chart and the history list.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::bmi_chart;
use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_SUBMIT, CSS_BADGE, CSS_BTN_DANGER, CSS_BTN_OUTLINE, CSS_BTN_PRIMARY, CSS_CARD,
    CSS_EMPTY_STATE,
};
use crate::dom_utils;
use crate::messages::{MeasurementField, Message, PendingDeletion};
use crate::metrics::{full_date_label, BmiBand, BmiResult};
use crate::models::BmiRecord;
use crate::state::AppState;
use crate::utils::format_decimal;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let (shell, main) = super::student_shell(document, state)?;
    dom_utils::append(&main, super::page_header(
        document,
        "IMC & Progresso",
        Some("Acompanhe a evolução do seu Índice de Massa Corporal"),
    )?)?;

    let Some(student) = &state.student else {
        dom_utils::append(&main, super::loading(document, "Carregando seus dados...")?)?;
        return Ok(shell);
    };

    let top = dom_utils::element(document, "div", "progress-grid", None)?;

    let calc = dom_utils::element(document, "section", CSS_CARD, None)?;
    dom_utils::append(&calc, dom_utils::element(document, "h3", "", Some("Calcular IMC"))?)?;
    dom_utils::append(&calc, dom_utils::element(
        document,
        "p",
        "muted",
        Some(&format!(
            "Com base no seu cadastro: {} kg, {} m",
            format_decimal(student.weight_kg, 1),
            format_decimal(student.height_m, 2)
        )),
    )?)?;
    let calc_btn = dom_utils::button(
        document,
        CSS_BTN_PRIMARY,
        if state.busy { "Calculando..." } else { "Calcular e Salvar IMC" },
        Message::CalculateBmi,
    )?;
    dom_utils::set_test_id(&calc_btn, "calculate-bmi")?;
    dom_utils::set_disabled(&calc_btn, state.busy)?;
    calc.append_child(&calc_btn)?;
    if let Some(result) = &state.bmi_result {
        dom_utils::append(&calc, result_card(document, result)?)?;
    }
    top.append_child(&calc)?;
    dom_utils::append(&top, measurement_form(document, state)?)?;
    main.append_child(&top)?;

    dom_utils::append(&main, bmi_chart::render(document, &student.bmi_history)?)?;
    dom_utils::append(&main, history(document, &student.bmi_history)?)?;
    dom_utils::append(&main, reference_table(document)?)?;

    Ok(shell)
}

fn result_card(document: &Document, result: &BmiResult) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "div", "bmi-result", None)?;
    dom_utils::set_test_id(&card, "bmi-result")?;
    let value = dom_utils::element(document, "strong", "bmi-value", Some(&format_decimal(result.value, 1)))?;
    value.set_attribute("style", &format!("color: {}", result.band.color()))?;
    card.append_child(&value)?;
    dom_utils::append(&card, dom_utils::element(
        document,
        "span",
        &format!("{} {}", CSS_BADGE, result.band.badge_class()),
        Some(result.band.label()),
    )?)?;
    dom_utils::append(&card, dom_utils::element(document, "p", "muted", Some(result.band.description()))?)?;
    dom_utils::append(&card, dom_utils::button(document, CSS_BTN_OUTLINE, "Limpar", Message::ClearBmiResult)?)?;
    Ok(card)
}

fn measurement_form(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "section", CSS_CARD, None)?;
    dom_utils::append(&card, dom_utils::element(document, "h3", "", Some("Atualizar Medidas"))?)?;

    let form = dom_utils::element(document, "form", "", None)?;
    dom_utils::on_submit(&form, Message::SubmitMeasurements)?;
    dom_utils::append(&form, dom_utils::labeled_input(
        document,
        "measure-weight",
        "Peso Atual (kg)",
        "number",
        &state.measurements.weight,
        |v| Message::UpdateMeasurementField(MeasurementField::Weight, v),
    )?)?;
    dom_utils::append(&form, dom_utils::labeled_input(
        document,
        "measure-height",
        "Altura Atual (m)",
        "number",
        &state.measurements.height,
        |v| Message::UpdateMeasurementField(MeasurementField::Height, v),
    )?)?;
    let submit = dom_utils::element(document, "button", CSS_BTN_PRIMARY, Some("Salvar Medidas e Calcular"))?;
    submit.set_attribute(ATTR_TYPE, BUTTON_TYPE_SUBMIT)?;
    dom_utils::set_disabled(&submit, state.busy)?;
    form.append_child(&submit)?;
    card.append_child(&form)?;
    Ok(card)
}

fn history(document: &Document, records: &[BmiRecord]) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "section", CSS_CARD, None)?;
    dom_utils::append(&card, dom_utils::element(document, "h3", "", Some("Histórico"))?)?;

    if records.is_empty() {
        dom_utils::append(&card, dom_utils::element(
            document,
            "p",
            CSS_EMPTY_STATE,
            Some("Nenhum registro encontrado."),
        )?)?;
        return Ok(card);
    }

    let list = dom_utils::element(document, "ul", "bmi-history", None)?;
    for record in records.iter().rev() {
        let band = BmiBand::classify(record.value);
        let item = dom_utils::element(document, "li", "history-row", None)?;
        dom_utils::set_test_id(&item, &format!("bmi-{}", record.id))?;
        dom_utils::append(&item, dom_utils::element(
            document,
            "span",
            "",
            Some(&full_date_label(&record.calculated_on)),
        )?)?;
        dom_utils::append(&item, dom_utils::element(
            document,
            "strong",
            "",
            Some(&format_decimal(record.value, 1)),
        )?)?;
        dom_utils::append(&item, dom_utils::element(
            document,
            "span",
            &format!("{} {}", CSS_BADGE, band.badge_class()),
            Some(band.label()),
        )?)?;
        dom_utils::append(&item, dom_utils::button(
            document,
            CSS_BTN_DANGER,
            "Excluir",
            Message::RequestDeletion(PendingDeletion::BmiRecord { id: record.id }),
        )?)?;
        list.append_child(&item)?;
    }
    card.append_child(&list)?;
    Ok(card)
}

fn reference_table(document: &Document) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "section", CSS_CARD, None)?;
    dom_utils::append(&card, dom_utils::element(document, "h3", "", Some("Tabela de Referência"))?)?;
    let list = dom_utils::element(document, "ul", "bmi-reference", None)?;
    for (band, range) in [
        (BmiBand::Underweight, "menor que 18,5"),
        (BmiBand::Normal, "18,5 a 24,9"),
        (BmiBand::Overweight, "25 a 29,9"),
        (BmiBand::Obese, "30 ou mais"),
    ] {
        let item = dom_utils::element(document, "li", "", None)?;
        dom_utils::append(&item, dom_utils::element(
            document,
            "span",
            &format!("{} {}", CSS_BADGE, band.badge_class()),
            Some(band.label()),
        )?)?;
        dom_utils::append(&item, dom_utils::element(document, "span", "muted", Some(range))?)?;
        list.append_child(&item)?;
    }
    card.append_child(&list)?;
    Ok(card)
}
