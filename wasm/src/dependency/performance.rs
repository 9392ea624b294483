#[cfg(target_arch = "wasm32")]
thread_local! {
    static PERFORMANCE: Option<web_sys::Performance> =
        web_sys::window().and_then(|w| w.performance());
}

#[cfg(target_arch = "wasm32")]
pub fn performance_now() -> f64 {
    PERFORMANCE.with(|perf| perf.as_ref().map(|p| p.now()).unwrap_or(0.0))
}

// No clock outside the browser; durations read as unavailable
#[cfg(not(target_arch = "wasm32"))]
pub fn performance_now() -> f64 {
    0.0
}

/// Milliseconds between two `performance_now` readings, if both were real
pub fn elapsed_ms(start: f64, end: f64) -> Option<f64> {
    (start > 0.0 && end >= start).then(|| end - start)
}
