//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the simulation, the terminal renderer and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 40 cells (indexed 0-39)
//! - **Height**: 23 cells (indexed 0-22)
//! - **Player start**: grid center, (20, 11)
//!
//! Each grid cell is drawn two terminal columns wide, so the playfield covers
//! 80x23 terminal cells.
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROCK_COUNT` | 120 | Rocks sampled per round (duplicates allowed) |
//! | `ENEMY_COUNT` | 12 | Enemies placed per round |
//! | `CRASH_FLASH_MS` | 100 | How long an enemy/rock crash stays highlighted |
//!
//! # Examples
//!
//! ```
//! use bigiots_types::{Direction, GridSize, Position, GRID_HEIGHT, GRID_WIDTH};
//!
//! let grid = GridSize::default();
//! assert_eq!(grid.center(), Position::new(20, 11));
//!
//! let dir = Direction::from_key('7').unwrap();
//! assert_eq!(dir.delta(), (-1, -1));
//! assert_eq!(Direction::from_key('i'), Direction::from_key('5'));
//!
//! assert_eq!(GRID_WIDTH, 40);
//! assert_eq!(GRID_HEIGHT, 23);
//! ```

/// Grid width in cells (40 columns)
pub const GRID_WIDTH: i16 = 40;

/// Grid height in cells (23 rows)
pub const GRID_HEIGHT: i16 = 23;

/// Terminal columns used by one grid cell
pub const CELL_COLUMNS: u16 = 2;

/// Rocks sampled at the start of every round
pub const ROCK_COUNT: usize = 120;

/// Enemies placed at the start of every round
pub const ENEMY_COUNT: usize = 12;

/// Duration of the highlighted crash glyph when an enemy hits a rock
pub const CRASH_FLASH_MS: u64 = 100;


/// A cell on the grid.
///
/// Coordinates are signed so that an out-of-bounds step (e.g. `x - 1` at the
/// left edge) is representable and can be rejected by [`GridSize::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, without any bounds check
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One pursuit step from `self` toward `target` (king move).
    ///
    /// ```
    /// use bigiots_types::Position;
    ///
    /// let enemy = Position::new(0, 0);
    /// assert_eq!(enemy.step_toward(Position::new(5, 5)), Position::new(1, 1));
    /// assert_eq!(enemy.step_toward(Position::new(0, 3)), Position::new(0, 1));
    /// ```
    pub fn step_toward(self, target: Position) -> Self {
        self.offset(pursuit_step(self.x, target.x), pursuit_step(self.y, target.y))
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev(self, other: Position) -> i16 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Per-axis pursuit: +1 if `from < to`, -1 if `from > to`, 0 when equal.
pub fn pursuit_step(from: i16, to: i16) -> i16 {
    (to - from).signum()
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: i16,
    pub height: i16,
}

impl GridSize {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Player start cell
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

/// The eight compass directions plus "stay"
///
/// Two key sets map onto these: the `u i o / j k l / 7 8 9` letter block and
/// the numeric keypad. `Stay` still lets the enemies advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Stay,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Look up the direction bound to `key`
    ///
    /// Keys are case sensitive; anything unmapped returns `None`.
    ///
    /// ```
    /// use bigiots_types::Direction;
    ///
    /// assert_eq!(Direction::from_key('8'), Some(Direction::Up));
    /// assert_eq!(Direction::from_key('k'), Some(Direction::Down));
    /// assert_eq!(Direction::from_key('q'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '7' => Some(Direction::UpLeft),
            '8' => Some(Direction::Up),
            '9' => Some(Direction::UpRight),
            'u' | '4' => Some(Direction::Left),
            'i' | '5' => Some(Direction::Stay),
            'o' | '6' => Some(Direction::Right),
            'j' | '1' => Some(Direction::DownLeft),
            'k' | '2' => Some(Direction::Down),
            'l' | '3' => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Step vector `(dx, dy)`; y grows downward
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Stay => (0, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Player,
    Enemy,
    Rock,
    Crash,
    Empty,
}

impl Glyph {
    pub fn as_char(&self) -> char {
        match self {
            Glyph::Player => '@',
            Glyph::Enemy => 'O',
            Glyph::Rock => '#',
            Glyph::Crash => 'X',
            Glyph::Empty => ' ',
        }
    }
}

/// A key read from the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key
    Char(char),
    /// Ctrl-C: abort the session
    Interrupt,
    /// Anything else (arrows, function keys, releases)
    Other,
}

/// State of the round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundOutcome {
    #[default]
    Ongoing,
    Lost,
    Won,
}

impl RoundOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Ongoing => "ongoing",
            RoundOutcome::Lost => "lost",
            RoundOutcome::Won => "won",
        }
    }
}

/// Round setup; defaults to the game constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub grid: GridSize,
    pub rock_count: usize,
    pub enemy_count: usize,
    pub crash_flash_ms: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            rock_count: ROCK_COUNT,
            enemy_count: ENEMY_COUNT,
            crash_flash_ms: CRASH_FLASH_MS,
        }
    }
}
