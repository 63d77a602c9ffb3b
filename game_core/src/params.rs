/// Table tennis tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between table edge and paddle
    pub const PADDLE_SPEED: f32 = 480.0; // units per second (8 per frame at 60 Hz)

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_SERVE: f32 = 240.0;
    pub const BALL_SPEED_MAX: f32 = 480.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60°
    pub const SERVE_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // ±30°

    // AI
    pub const AI_JITTER_RANGE: f32 = 50.0;

    // Match defaults
    pub const MATCH_FORMAT: u8 = 5; // Best of 5
    pub const POINTS_TO_WIN: u16 = 11;
    pub const SERVE_SWITCH_POINTS: u16 = 2;
    pub const DEUCE_SERVE_SWITCH_POINTS: u16 = 1;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz, also the AI reference frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
