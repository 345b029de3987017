//! Shared modal helper used by the exercise/workout dialogs and the delete
//! confirmation.
//!
//! Pages are rebuilt on every render, so a modal is rebuilt with them: it is
//! appended to the page container whenever the state says it is open.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_ACTIONS_ROW, CSS_BTN_DANGER, CSS_BTN_OUTLINE, CSS_MODAL, ID_CONFIRM_MODAL};
use crate::dom_utils;
use crate::messages::{Message, PendingDeletion};

/// Append a `<div id="{id}" class="modal">` backdrop to `parent` with a
/// titled `.modal-content` inside.
///
/// Returns `(backdrop, content)`.
pub fn ensure_modal(document: &Document, parent: &Element, id: &str, title: &str) -> Result<(Element, Element), JsValue> {
    let backdrop = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = dom_utils::element(document, "div", CSS_MODAL, None)?;
            el.set_id(id);
            parent.append_child(&el)?;
            el
        }
    };
    backdrop.set_attribute("role", "dialog")?;
    backdrop.set_attribute("aria-modal", "true")?;

    let content = match backdrop.query_selector(".modal-content")? {
        Some(el) => el,
        None => {
            let el = dom_utils::element(document, "div", "modal-content", None)?;
            backdrop.append_child(&el)?;
            el
        }
    };

    let heading = dom_utils::element(document, "h3", "modal-title", Some(title))?;
    content.append_child(&heading)?;

    Ok((backdrop, content))
}

/// Move keyboard focus into the modal.
pub fn show(modal_backdrop: &Element) {
    dom_utils::focus_first_interactive(modal_backdrop);
}

/// "Are you sure?" dialog for a pending delete. Cancel sends nothing.
pub fn confirm_deletion(document: &Document, parent: &Element, pending: &PendingDeletion, busy: bool) -> Result<(), JsValue> {
    let (backdrop, content) = ensure_modal(document, parent, ID_CONFIRM_MODAL, "Confirmar exclusão")?;

    let prompt = dom_utils::element(document, "p", "", Some(&pending.prompt()))?;
    content.append_child(&prompt)?;

    let actions = dom_utils::element(document, "div", CSS_ACTIONS_ROW, None)?;
    let cancel = dom_utils::button(document, CSS_BTN_OUTLINE, "Cancelar", Message::CancelDeletion)?;
    let confirm = dom_utils::button(
        document,
        CSS_BTN_DANGER,
        if busy { "Excluindo..." } else { "Excluir" },
        Message::ConfirmDeletion,
    )?;
    dom_utils::set_test_id(&confirm, "confirm-delete")?;
    dom_utils::set_disabled(&confirm, busy)?;
    actions.append_child(&cancel)?;
    actions.append_child(&confirm)?;
    content.append_child(&actions)?;

    show(&backdrop);
    Ok(())
}
