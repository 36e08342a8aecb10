// World defaults
pub const WORLD_WIDTH: f64 = 1000.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const GROUND_LEVEL: f64 = 600.0;

// Dodo
pub const DODO_WIDTH: f64 = 200.0;
pub const DODO_HEIGHT: f64 = 200.0;
pub const DODO_START_X: f64 = 50.0;
pub const DODO_START_Y: f64 = 500.0;
pub const JUMP_HEIGHT: f64 = 20.0;
pub const GRAVITY: f64 = 1.0;
pub const WALK_SPEED: f64 = 5.0;
pub const DODO_SPRITE_COLUMNS: u32 = 2;
pub const DODO_SPRITE_ROWS: u32 = 3;
pub const DODO_FRAME_INTERVAL: u32 = 7;

// Dutchman
pub const DUTCHMAN_START_X: f64 = 380.0;
pub const DUTCHMAN_START_Y: f64 = 350.0;
pub const DUTCHMAN_WIDTH: f64 = 200.0;
pub const DUTCHMAN_HEIGHT: f64 = 220.0;
pub const DUTCHMAN_MAX_DISTANCE: f64 = 200.0;
pub const DUTCHMAN_FRAME_COUNT: u32 = 8;
pub const DUTCHMAN_FRAME_INTERVAL: u32 = 17;

// Platforms
pub const DEFAULT_MARGIN_LEFT: f64 = 60.0;
pub const DEFAULT_MARGIN_RIGHT: f64 = 60.0;
pub const DEFAULT_MARGIN_TOP: f64 = 60.0;
/// Half-height of the band around a platform's effective top that counts as a landing.
pub const LANDING_TOLERANCE: f64 = 5.0;

// Fruit
pub const FRUIT_SIZE: f64 = 50.0;

// Timing
/// One step per display frame (~60 FPS).
pub const TICK_MS: u64 = 16;
/// Upper bound on the time fed into one `tick` call.
pub const MAX_FRAME_DT_MS: u64 = 100;
/// Steps a key press stays held without a repeat (terminals rarely report releases).
pub const INPUT_HOLD_TICKS: u32 = 8;
