use crate::{
    Ball, Config, Events, GameError, GameRng, Player, PointOutcome, Table, Umpire,
};
use hecs::World;
use tracing::debug;

/// Put the ball back in play from the centre, away from `server`
pub fn serve_ball(
    world: &mut World,
    server: Player,
    config: &Config,
    table: &Table,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(
            table.center(),
            config.ball_speed_serve,
            config.serve_half_angle,
            server,
            rng,
        );
        debug!(server = server.number(), vx = ball.vel.x, vy = ball.vel.y, "serve");
    }
}

/// Hold the ball still at the centre between sets
pub fn park_ball(world: &mut World, table: &Table) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.park(table.center());
    }
}

/// Ball went out past `conceded`: award the point and get the ball ready
pub fn award_point(
    world: &mut World,
    umpire: &mut Umpire,
    conceded: Player,
    config: &Config,
    table: &Table,
    rng: &mut GameRng,
    events: &mut Events,
) -> Result<PointOutcome, GameError> {
    let outcome = umpire.score_point(conceded.other(), events)?;

    match outcome {
        PointOutcome::Rally => serve_ball(world, umpire.serve().server, config, table, rng),
        PointOutcome::SetWon(_) | PointOutcome::MatchWon(_) => park_ball(world, table),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, GameEvent, Settings};
    use glam::Vec2;

    fn setup() -> (World, Config, Table, Umpire, Events, GameRng) {
        let config = Config::new();
        let table = Table::from_config(&config);
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(-10.0, 200.0), Vec2::new(-240.0, 0.0), &config);
        let umpire = Umpire::new(Settings::default()).unwrap();
        (world, config, table, umpire, Events::new(), GameRng::new(12345))
    }

    fn ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        *ball
    }

    #[test]
    fn test_right_player_scores_when_left_concedes() {
        let (mut world, config, table, mut umpire, mut events, mut rng) = setup();

        let outcome = award_point(
            &mut world,
            &mut umpire,
            Player::One,
            &config,
            &table,
            &mut rng,
            &mut events,
        )
        .unwrap();

        assert_eq!(outcome, PointOutcome::Rally);
        assert_eq!(umpire.score().player2, 1, "Player two should score");
        assert_eq!(umpire.score().player1, 0);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::PointScored {
                player: Player::Two
            }]
        );
    }

    #[test]
    fn test_ball_reserved_after_rally_point() {
        let (mut world, config, table, mut umpire, mut events, mut rng) = setup();
        award_point(
            &mut world,
            &mut umpire,
            Player::Two,
            &config,
            &table,
            &mut rng,
            &mut events,
        )
        .unwrap();

        let ball = ball(&world);
        assert_eq!(ball.pos, table.center(), "Ball should reset to centre");
        assert!((ball.speed() - config.ball_speed_serve).abs() < 0.01);
        // Player one still serves after one point
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_ball_parked_after_set() {
        let (mut world, config, table, mut umpire, mut events, mut rng) = setup();
        for _ in 0..11 {
            award_point(
                &mut world,
                &mut umpire,
                Player::Two,
                &config,
                &table,
                &mut rng,
                &mut events,
            )
            .unwrap();
        }

        let ball = ball(&world);
        assert_eq!(ball.pos, table.center());
        assert_eq!(ball.vel, Vec2::ZERO, "Ball waits for the next set");
        assert_eq!(umpire.state().sets.player1, 1);
    }
}
