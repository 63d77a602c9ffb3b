use crate::{Ball, Paddle, PaddleIntent, Player, Table, Time};
use hecs::World;

/// What happened to the ball during one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    WallBounce,
    /// Ball left the table past `conceded`'s edge
    OutOfBounds { conceded: Player },
}

/// Integrate the ball, bounce it off the top and bottom walls and report exits
pub fn step_ball(ball: &mut Ball, dt: f32, table: &Table) -> Option<BallEvent> {
    ball.pos += ball.vel * dt;

    let mut event = None;
    let r = ball.radius;
    if ball.pos.y <= r {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = r;
        event = Some(BallEvent::WallBounce);
    } else if ball.pos.y >= table.height - r {
        ball.vel.y = -ball.vel.y.abs();
        ball.pos.y = table.height - r;
        event = Some(BallEvent::WallBounce);
    }

    if ball.pos.x < -r {
        event = Some(BallEvent::OutOfBounds {
            conceded: Player::One,
        });
    } else if ball.pos.x > table.width + r {
        event = Some(BallEvent::OutOfBounds {
            conceded: Player::Two,
        });
    }

    event
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, table: &Table) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.is_active() {
            let delta = intent.dir as f32 * paddle.speed * time.dt;
            paddle.y = paddle.clamp_y(paddle.y + delta, table.height);
        }
    }
}

/// Move the ball entity
pub fn move_ball(world: &mut World, time: &Time, table: &Table) -> Option<BallEvent> {
    world
        .query_mut::<&mut Ball>()
        .into_iter()
        .next()
        .and_then(|(_entity, ball)| step_ball(ball, time.dt, table))
}
