//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! fade-out after a few seconds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{ID_TOAST_ROOT, ID_TOAST_STYLES, TOAST_DURATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

pub fn show(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(e) = append_toast(&document, message, kind) {
        web_sys::console::warn_1(&format!("Toast failed ({}): {:?}", message, e).into());
    }
}

fn append_toast(document: &Document, message: &str, kind: ToastKind) -> Result<(), JsValue> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(kind.class());
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(TOAST_DURATION_MS, move || toast.remove()).forget();
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(ID_TOAST_ROOT) {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id(ID_TOAST_ROOT);
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_TOAST_STYLES).is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:6px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards;max-width:360px}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
/* spinner for buttons */
.spinner{display:inline-block;width:14px;height:14px;border:2px solid #fff;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle}
@keyframes spin{to{transform:rotate(360deg)}}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id(ID_TOAST_STYLES);
    style.set_text_content(Some(css));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&style)?,
    };
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toast_is_prepended_to_root() {
        show("primeiro", ToastKind::Success);
        show("segundo", ToastKind::Error);
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.get_element_by_id(ID_TOAST_ROOT).unwrap();
        let first = root.first_element_child().unwrap();
        assert_eq!(first.text_content().as_deref(), Some("segundo"));
        assert!(first.class_list().contains("toast-error"));
    }
}
