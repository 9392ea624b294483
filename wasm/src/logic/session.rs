use log::{debug, info, warn};

use crate::constants::DEFAULT_CHANCE_LIGHT_STARTS_ON;
use crate::data::Grid;
use crate::dependency::{DefaultSource, RandomSource};
use crate::types::{Coord, GameConfig, GameStatus, LightsOutResult, SessionView};

/// One game: the config it was started with, the current board, and the
/// random source used to deal new boards on restart.
pub struct GameSession<R: RandomSource = DefaultSource> {
    config: GameConfig,
    grid: Grid,
    status: GameStatus,
    source: R,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: GameConfig, mut source: R) -> LightsOutResult<Self> {
        if let Err(err) = config.validate() {
            warn!("rejected game config: {}", err);
            return Err(err);
        }
        let grid = deal(&config, &mut source);
        let session = Self::assemble(config, grid, source);
        info!(
            "new {}x{} game, {} lit",
            config.nrows,
            config.ncols,
            session.grid.lit_count()
        );
        Ok(session)
    }

    /// Wraps a board built by hand instead of dealt at random
    pub fn from_grid(grid: Grid, source: R) -> LightsOutResult<Self> {
        let config = GameConfig::new(grid.nrows(), grid.ncols(), DEFAULT_CHANCE_LIGHT_STARTS_ON);
        config.validate()?;
        Ok(Self::assemble(config, grid, source))
    }

    fn assemble(config: GameConfig, grid: Grid, source: R) -> Self {
        let status = GameStatus::from_solved(grid.is_solved());
        Self {
            config,
            grid,
            status,
            source,
        }
    }

    /// Applies one activation and reports the resulting board. Activations
    /// after a win are still applied.
    pub fn handle_activation(&mut self, coord: Coord) -> SessionView {
        self.grid = self.grid.toggled_around(coord);
        let previous = self.status;
        self.status = GameStatus::from_solved(self.grid.is_solved());
        debug!("activated {}, {} lit", coord, self.grid.lit_count());
        if self.status.is_won() && !previous.is_won() {
            info!("board solved");
        }
        self.view()
    }

    /// Deals a new board with the current config
    pub fn restart(&mut self) {
        let grid = deal(&self.config, &mut self.source);
        self.status = GameStatus::from_solved(grid.is_solved());
        self.grid = grid;
        info!("restarted {}x{} game", self.config.nrows, self.config.ncols);
    }

    /// Switches to `config` and deals a new board. An invalid config leaves
    /// the current game as it was.
    pub fn restart_with(&mut self, config: GameConfig) -> LightsOutResult<()> {
        if let Err(err) = config.validate() {
            warn!("rejected game config: {}", err);
            return Err(err);
        }
        self.config = config;
        self.restart();
        Ok(())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            grid: self.grid.clone(),
            won: self.status.is_won(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }
}

fn deal<R: RandomSource + ?Sized>(config: &GameConfig, source: &mut R) -> Grid {
    Grid::random(
        config.nrows,
        config.ncols,
        config.chance_light_starts_on,
        source,
    )
}
