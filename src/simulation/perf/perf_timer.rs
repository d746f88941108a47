#[cfg(not(target_arch = "wasm32"))]
use std::{sync::OnceLock, time::Instant};

/// Milliseconds since an arbitrary origin.
///
/// `Date.now()` in the browser; natively an `Instant` taken on first use,
/// since imported JS functions cannot be called off wasm32.
pub(crate) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `f`, also returning its wall time in ms when `enabled` (0 otherwise).
#[inline]
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let start = now_ms();
    let out = f();
    (out, now_ms() - start)
}
