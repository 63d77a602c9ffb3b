use crate::{Ball, Difficulty, GameRng, Paddle, PaddleIntent, Params, Table, Time};
use hecs::World;

/// Marks a paddle the computer may drive
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Target top-edge Y for an AI paddle chasing `ball_y`.
///
/// Proportional tracking: the paddle closes `speed` of the gap per 60 Hz
/// frame (`frames` scales that for other step sizes), plus a jitter whose
/// width shrinks as `accuracy` grows. The result is clamped to the table.
pub fn compute_ai_move(
    paddle: &Paddle,
    ball_y: f32,
    difficulty: Difficulty,
    frames: f32,
    rng: &mut GameRng,
    table: &Table,
) -> f32 {
    let ai = difficulty.config();

    let error = ball_y - paddle.center_y();
    let step = error * ai.speed * frames;
    let jitter = (rng.unit() - 0.5) * (1.0 - ai.accuracy) * Params::AI_JITTER_RANGE;

    paddle.clamp_y(paddle.y + step + jitter, table.height)
}

/// Steer AI paddles that have no human input this step
pub fn drive_ai_paddles(
    world: &mut World,
    difficulty: Difficulty,
    time: &Time,
    rng: &mut GameRng,
    table: &Table,
) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };
    let frames = time.dt / Params::FIXED_DT;

    for (_entity, (paddle, intent, _ai)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &AiControlled)>()
    {
        if intent.is_active() {
            continue;
        }
        paddle.y = compute_ai_move(paddle, ball_y, difficulty, frames, rng, table);
    }
}
