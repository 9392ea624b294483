//! Lights Out puzzle core compiled to WebAssembly.
//!
//! `data` holds the board and its toggle rule, `logic` sequences boards into
//! a game session, and `service` exposes that session to JavaScript.

mod constants;
mod data;
mod dependency;
mod logic;
mod service;
mod types;

pub use data::Grid;
pub use dependency::{default_source, DefaultSource, RandomSource};
pub use logic::GameSession;
pub use service::{init_logging, LightsOut};
pub use types::{Coord, GameConfig, GameStatus, LightsOutError, LightsOutResult, SessionView};
