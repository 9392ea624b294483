pub mod config;
pub mod coord;
pub mod error;
pub mod view;

pub use config::GameConfig;
pub use coord::Coord;
pub use error::{LightsOutError, LightsOutResult};
pub use view::{GameStatus, SessionView};
