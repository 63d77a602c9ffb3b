pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod serve;
pub mod session;
pub mod systems;
pub mod table;
pub mod umpire;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use serve::{is_deuce, on_point_scored, ServeState};
pub use session::*;
pub use table::*;
pub use umpire::*;

use hecs::World;

/// Helper to create a paddle entity at its resting position
pub fn create_paddle(world: &mut World, player: Player, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(player, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_speed_max),))
}
