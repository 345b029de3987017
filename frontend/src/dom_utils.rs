//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for element creation and event wiring so pages don't
//! repeat the same `create_element` / `Closure::wrap` boilerplate.
//!
//! Listeners attached while building a page are owned by this module and
//! dropped by [`release_page_listeners`] before the next render replaces the
//! page, instead of being leaked with `Closure::forget`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::constants::{ATTR_DATA_TESTID, ATTR_TYPE, BUTTON_TYPE_BUTTON};
use crate::messages::Message;
use crate::state::dispatch_global_message;

type PageListener = Closure<dyn FnMut(Event)>;

thread_local! {
    static PAGE_LISTENERS: RefCell<Vec<PageListener>> = RefCell::new(Vec::new());
}

/// Attach `cb` to `el` and keep it alive until the page is released.
fn listen(el: &Element, event: &str, cb: PageListener) -> Result<(), JsValue> {
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    PAGE_LISTENERS.with(|l| l.borrow_mut().push(cb));
    Ok(())
}

/// Drop every listener of the current page. Called right before the page
/// is torn down; a listener that is running at that moment is freed by
/// wasm-bindgen once it returns.
pub fn release_page_listeners() {
    let released = PAGE_LISTENERS.with(|l| std::mem::take(&mut *l.borrow_mut()));
    drop(released);
}

#[cfg(all(test, target_arch = "wasm32"))]
fn page_listener_count() -> usize {
    PAGE_LISTENERS.with(|l| l.borrow().len())
}

/// Append a freshly built `child` to `parent`.
pub fn append(parent: &Element, child: Element) -> Result<(), JsValue> {
    parent.append_child(&child)?;
    Ok(())
}

/// `<tag class="...">` with optional text content.
pub fn element(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

/// `<button type="button">` that dispatches `msg` when clicked.
pub fn button(document: &Document, class: &str, label: &str, msg: Message) -> Result<Element, JsValue> {
    let btn = element(document, "button", class, Some(label))?;
    btn.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    on_click(&btn, msg)?;
    Ok(btn)
}

pub fn set_test_id(el: &Element, id: &str) -> Result<(), JsValue> {
    el.set_attribute(ATTR_DATA_TESTID, id)
}

pub fn set_disabled(el: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        el.set_attribute("disabled", "")
    } else {
        el.remove_attribute("disabled")
    }
}

/// Dispatch a fixed message on click.
pub fn on_click(el: &Element, msg: Message) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        dispatch_global_message(msg.clone());
    }) as Box<dyn FnMut(_)>);
    listen(el, "click", cb)
}

/// Build a message from the element's current value on every `input`
/// (text fields) or `change` (selects, checkboxes) event.
pub fn on_value<F>(el: &Element, event: &str, to_msg: F) -> Result<(), JsValue>
where
    F: Fn(String) -> Message + 'static,
{
    let cb = Closure::wrap(Box::new(move |e: Event| {
        if let Some(value) = e.target().and_then(|t| event_value(&t)) {
            dispatch_global_message(to_msg(value));
        }
    }) as Box<dyn FnMut(_)>);
    listen(el, event, cb)
}

fn event_value(target: &web_sys::EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

/// Dispatch on `submit` and keep the browser from reloading the page.
pub fn on_submit(form: &Element, msg: Message) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        dispatch_global_message(msg.clone());
    }) as Box<dyn FnMut(_)>);
    listen(form, "submit", cb)
}

/// Labelled `<input>` wired to `to_msg`.
pub fn labeled_input<F>(
    document: &Document,
    id: &str,
    label: &str,
    input_type: &str,
    value: &str,
    to_msg: F,
) -> Result<Element, JsValue>
where
    F: Fn(String) -> Message + 'static,
{
    let row = element(document, "div", crate::constants::CSS_FORM_ROW, None)?;
    let lbl = element(document, "label", "", Some(label))?;
    lbl.set_attribute("for", id)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(id);
    input.set_type(input_type);
    input.set_value(value);
    if input_type == "number" {
        input.set_attribute("step", "any")?;
    }
    on_value(&input, "input", to_msg)?;

    row.append_child(&lbl)?;
    row.append_child(&input)?;
    Ok(row)
}

/// Labelled `<textarea>` wired to `to_msg`.
pub fn labeled_textarea<F>(document: &Document, id: &str, label: &str, value: &str, to_msg: F) -> Result<Element, JsValue>
where
    F: Fn(String) -> Message + 'static,
{
    let row = element(document, "div", crate::constants::CSS_FORM_ROW, None)?;
    let lbl = element(document, "label", "", Some(label))?;
    lbl.set_attribute("for", id)?;

    let area: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    area.set_id(id);
    area.set_value(value);
    on_value(&area, "input", to_msg)?;

    row.append_child(&lbl)?;
    row.append_child(&area)?;
    Ok(row)
}

// ---------------------------------------------------------------------------
// Focus Management Utilities
// ---------------------------------------------------------------------------

/// Focus the first interactive element within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_interactive(container: &Element) -> bool {
    let focusable_selectors = [
        "input:not([disabled])",
        "button:not([disabled])",
        "textarea:not([disabled])",
        "select:not([disabled])",
        "a[href]",
    ];

    for selector in &focusable_selectors {
        if let Ok(Some(element)) = container.query_selector(selector) {
            if let Ok(html_element) = element.dyn_into::<HtmlElement>() {
                let _ = html_element.focus();
                return true;
            }
        }
    }
    false
}

/// Id and caret position of the focused text field, so a full re-render can
/// put the cursor back where the user was typing.
pub fn capture_focus(document: &Document) -> Option<(String, Option<u32>)> {
    let active = document.active_element()?;
    let id = active.id();
    if id.is_empty() {
        return None;
    }
    let caret = active
        .dyn_ref::<HtmlInputElement>()
        .and_then(|i| i.selection_start().ok().flatten());
    Some((id, caret))
}

pub fn restore_focus(document: &Document, saved: Option<(String, Option<u32>)>) {
    let Some((id, caret)) = saved else {
        return;
    };
    let Some(el) = document.get_element_by_id(&id) else {
        return;
    };
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    if let (Some(input), Some(pos)) = (el.dyn_ref::<HtmlInputElement>(), caret) {
        let _ = input.set_selection_range(pos, pos);
    }
}
