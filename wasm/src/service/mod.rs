mod lights_out;

use wasm_bindgen::prelude::*;

use crate::dependency::{install_logger, parse_level};

pub use lights_out::LightsOut;

/// Sends `log` output to the browser console at the given level
/// (`error`, `warn`, `info`, `debug`, `trace` or `off`)
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    install_logger(parse_level(level))
}
