// Shared game constants

// Board defaults used when the presentation layer omits a setting
pub const DEFAULT_NROWS: usize = 3;
pub const DEFAULT_NCOLS: usize = 3;
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.5;

// Orthogonal neighbourhood flipped by one activation, centre first
pub const TOGGLE_OFFSETS: [(i64, i64); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

// Separator between row and column in a cell key ("row-col")
pub const CELL_KEY_SEPARATOR: char = '-';
