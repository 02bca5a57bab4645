//! Simulation constants and tuning parameters.
//!
//! All values are fixed at wave start; nothing here is
//! runtime-adjustable.

// --- Playfield ---

/// Playfield width (abstract pixels).
pub const GAME_WIDTH: f64 = 800.0;

/// Playfield height (abstract pixels).
pub const GAME_HEIGHT: f64 = 700.0;

/// Horizontal threshold protected by the player: any alien whose
/// lower edge reaches it ends the wave in defeat.
pub const DEFENSE_LINE: f64 = 100.0;

// --- Formation grid ---

/// Number of alien rows (row 0 is the top of the formation).
pub const ALIEN_ROWS: usize = 5;

/// Number of alien columns.
pub const ALIENS_IN_ROW: usize = 11;

/// Alien bounding-box width.
pub const ALIEN_WIDTH: f64 = 33.0;

/// Alien bounding-box height.
pub const ALIEN_HEIGHT: f64 = 33.0;

/// Horizontal gap between adjacent aliens, and the wall margin used
/// by the boundary check when the formation marches.
pub const ALIEN_H_SEP: f64 = 16.0;

/// Vertical gap between adjacent alien rows.
pub const ALIEN_V_SEP: f64 = 16.0;

/// Distance from the top of the playfield to the top row at spawn.
pub const ALIEN_CEILING: f64 = 100.0;

/// Horizontal distance covered by one formation march step.
pub const ALIEN_H_WALK: f64 = 8.0;

/// Vertical distance covered by one descent step.
pub const ALIEN_V_WALK: f64 = 11.0;

/// Seconds between formation steps at wave start.
pub const INITIAL_STEP_INTERVAL: f64 = 0.7;

/// The step interval is multiplied by this on every alien kill.
/// There is no floor: a long wave compounds toward zero.
pub const SPEED_FACTOR: f64 = 0.97;

// --- Scoring ---

/// An alien in grid row r is worth (r + 1) * POINTS_PER_ROW.
pub const POINTS_PER_ROW: u32 = 10;

// --- Ship ---

pub const SHIP_WIDTH: f64 = 44.0;

pub const SHIP_HEIGHT: f64 = 44.0;

/// Distance from the bottom of the playfield to the bottom of the ship.
pub const SHIP_BOTTOM: f64 = 32.0;

/// Fixed vertical position of the ship's center.
pub const SHIP_Y: f64 = SHIP_BOTTOM + SHIP_HEIGHT / 2.0;

/// Horizontal distance covered by one move intent.
pub const SHIP_MOVEMENT: f64 = 10.0;

/// Lives at wave start.
pub const SHIP_LIVES: u32 = 3;

// --- Bolts ---

pub const BOLT_WIDTH: f64 = 4.0;

pub const BOLT_HEIGHT: f64 = 16.0;

/// Vertical distance a bolt covers per resolved frame.
pub const BOLT_SPEED: f64 = 10.0;

/// The enemy-fire countdown reseeds to a uniform value in
/// 1..=BOLT_RATE formation steps after each alien shot.
pub const BOLT_RATE: u32 = 5;
