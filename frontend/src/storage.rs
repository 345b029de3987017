//! Bearer token persistence in `localStorage`.
//!
//! The token is the only client-side state that survives a reload.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::constants::TOKEN_STORAGE_KEY;
use crate::debug_log;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored token, if any. Blank values count as absent.
pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}

pub fn store_token(token: &str) -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(TOKEN_STORAGE_KEY, token)?;
    debug_log!("Stored session token ({} chars)", token.len());
    Ok(())
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        debug_log!("Cleared session token");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_local_storage() {
        clear_token();
        assert_eq!(load_token(), None);

        store_token("abc.def.ghi").unwrap();
        assert_eq!(load_token().as_deref(), Some("abc.def.ghi"));

        clear_token();
        assert_eq!(load_token(), None);
    }
}
