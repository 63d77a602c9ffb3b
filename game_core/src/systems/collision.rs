use crate::{Ball, Config, Events, GameEvent, Paddle, Player};
use hecs::World;
use tracing::trace;

/// Bounce the ball off `paddle` if they overlap and the ball is heading at it.
///
/// The outgoing angle follows where the ball met the paddle: dead centre goes
/// straight back, the tips leave at `max_bounce_angle`. Each hit speeds the
/// ball up by `ball_speed_increase`, capped at the ball's `max_speed`.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let approaching = match paddle.player {
        Player::One => ball.vel.x < 0.0,
        Player::Two => ball.vel.x > 0.0,
    };
    if !approaching || !paddle.bounds().intersects_circle(ball.pos, ball.radius) {
        return false;
    }

    let offset = ball.pos.y - paddle.bounds().center().y;
    let relative_intersect = (offset / (paddle.height / 2.0)).clamp(-1.0, 1.0);
    let angle = relative_intersect * config.max_bounce_angle;

    let speed = (ball.speed() * config.ball_speed_increase).min(ball.max_speed);
    let direction = match paddle.player {
        Player::One => 1.0,
        Player::Two => -1.0,
    };
    ball.vel = glam::Vec2::new(angle.cos() * speed * direction, angle.sin() * speed);

    // Flush against the facing edge so the next step cannot re-trigger
    ball.pos.x = match paddle.player {
        Player::One => paddle.x + paddle.width + ball.radius,
        Player::Two => paddle.x - ball.radius,
    };

    true
}

/// Check the ball against both paddles, player one first. At most one hit per step.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
) -> Option<Player> {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.player.number());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if resolve_paddle_collision(ball, paddle, config) {
                trace!(
                    player = paddle.player.number(),
                    speed = ball.speed(),
                    "paddle hit"
                );
                events.push(GameEvent::PaddleHit {
                    player: paddle.player,
                });
                return Some(paddle.player);
            }
        }
    }
    None
}
