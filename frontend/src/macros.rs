//! Small crate-wide convenience macros.

/// Console logging that only exists in debug builds running in the browser.
///
/// Native builds (unit tests, `cargo check` on the host) expand to nothing
/// but still type-check the format arguments.
///
/// ```rust,ignore
/// debug_log!("Loaded {} exercises", exercises.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
