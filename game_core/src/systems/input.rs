use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn this tick's held keys into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.player);
    }
}
