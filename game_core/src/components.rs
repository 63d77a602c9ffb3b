use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng};

/// One of the two players. Player one defends the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, as shown to players
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player: Player,
    pub x: f32, // left edge, fixed
    pub y: f32, // top edge, clamped to table
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(player: Player, config: &Config) -> Self {
        Self {
            player,
            x: config.paddle_x(player),
            y: config.paddle_rest_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }

    /// Clamp a top-edge Y into `[0, table_height - height]`
    pub fn clamp_y(&self, y: f32, table_height: f32) -> f32 {
        y.clamp(0.0, (table_height - self.height).max(0.0))
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub max_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, max_speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            max_speed,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Park the ball at `center` with no velocity
    pub fn park(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }

    /// Serve from `center` away from `server` at a random angle within ±`half_angle`
    pub fn serve(
        &mut self,
        center: Vec2,
        speed: f32,
        half_angle: f32,
        server: Player,
        rng: &mut GameRng,
    ) {
        self.pos = center;

        let angle: f32 = if half_angle > 0.0 {
            rng.0.gen_range(-half_angle..half_angle)
        } else {
            0.0
        };
        let direction = match server {
            Player::One => 1.0, // towards player two
            Player::Two => -1.0,
        };

        self.vel = Vec2::new(angle.cos() * speed * direction, angle.sin() * speed);
    }
}

/// Movement intent for a human-driven paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(up: bool, down: bool) -> Self {
        Self {
            dir: down as i8 - up as i8,
        }
    }

    pub fn is_active(&self) -> bool {
        self.dir != 0
    }
}
