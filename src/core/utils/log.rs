//! Console logging
//!
//! In the browser messages go to the JS console through `web_sys`. Off
//! wasm32 the macros only type-check their arguments: imported JS functions
//! cannot run there, and native tests should stay quiet.
//!
//! Usage:
//! ```ignore
//! console_log!("restart r={} q={}", r, q);
//! console_warn!("bad options: {}", err);
//! ```

/// `console.log` with `format!` arguments
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

/// `console.warn` with `format!` arguments
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
