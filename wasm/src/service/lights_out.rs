use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::dependency::{default_source, elapsed_ms, performance_now};
use crate::logic::GameSession;
use crate::types::{Coord, GameConfig, LightsOutError, LightsOutResult};

/// Browser-facing handle on one Lights Out session.
#[wasm_bindgen]
pub struct LightsOut {
    session: GameSession,
    last_activation_duration_ms: f64,
}

#[wasm_bindgen]
impl LightsOut {
    #[wasm_bindgen(constructor)]
    pub fn new(nrows: usize, ncols: usize, chance_light_starts_on: f64) -> Result<LightsOut, JsValue> {
        Ok(Self::with_config(GameConfig::new(
            nrows,
            ncols,
            chance_light_starts_on,
        ))?)
    }

    #[wasm_bindgen]
    pub fn with_defaults() -> Result<LightsOut, JsValue> {
        Ok(Self::with_config(GameConfig::default())?)
    }

    /// Accepts `{ nrows, ncols, chanceLightStartsOn }`; missing keys, or a
    /// missing object, take the defaults
    #[wasm_bindgen]
    pub fn from_config(config: JsValue) -> Result<LightsOut, JsValue> {
        let config = parse_config(config)?;
        Ok(Self::with_config(config)?)
    }

    /// Returns whether the board is solved after this move. Coordinates are
    /// taken as JS numbers; non-integral or huge values miss the board.
    #[wasm_bindgen]
    pub fn activate(&mut self, row: f64, col: f64) -> bool {
        self.apply(Coord::from((row, col)))
    }

    /// Same as `activate`, for a `"<row>-<col>"` cell key
    #[wasm_bindgen]
    pub fn activate_key(&mut self, key: &str) -> Result<bool, JsValue> {
        let coord: Coord = key.parse()?;
        Ok(self.apply(coord))
    }

    #[wasm_bindgen]
    pub fn cell_key(row: f64, col: f64) -> String {
        Coord::from((row, col)).to_string()
    }

    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.session.restart();
    }

    #[wasm_bindgen]
    pub fn restart_with(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = parse_config(config)?;
        self.session.restart_with(config)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    #[wasm_bindgen]
    pub fn get_status(&self) -> u32 {
        self.session.status().into()
    }

    #[wasm_bindgen]
    pub fn get_nrows(&self) -> usize {
        self.session.grid().nrows()
    }

    #[wasm_bindgen]
    pub fn get_ncols(&self) -> usize {
        self.session.grid().ncols()
    }

    #[wasm_bindgen]
    pub fn is_lit(&self, row: f64, col: f64) -> bool {
        self.session.grid().is_lit(Coord::from((row, col)))
    }

    #[wasm_bindgen]
    pub fn get_lit_count(&self) -> usize {
        self.session.grid().lit_count()
    }

    /// `{ grid: boolean[][], won: boolean }`
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.view()).unwrap_or(JsValue::NULL)
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn get_flat_grid(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.session.grid().to_flat().as_slice())
    }

    #[wasm_bindgen]
    pub fn get_last_activation_duration(&self) -> f64 {
        self.last_activation_duration_ms
    }
}

impl LightsOut {
    fn with_config(config: GameConfig) -> LightsOutResult<Self> {
        Ok(Self {
            session: GameSession::new(config, default_source())?,
            last_activation_duration_ms: 0.0,
        })
    }

    fn apply(&mut self, coord: Coord) -> bool {
        let start = performance_now();
        let won = self.session.handle_activation(coord).won;
        if let Some(duration) = elapsed_ms(start, performance_now()) {
            self.last_activation_duration_ms = duration;
        }
        won
    }
}

fn parse_config(config: JsValue) -> LightsOutResult<GameConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(GameConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|err| LightsOutError::InvalidConfig(err.to_string()))
}

#[cfg(test)]
impl LightsOut {
    pub(crate) fn session(&self) -> &GameSession {
        &self.session
    }
}
