//! Translate simulation state into view messages and view commands into settings

use game_core::{ConfigError, Difficulty, GameEvent, Player, SessionPhase, Settings, Snapshot};
use proto::ToView;

pub fn phase_code(phase: SessionPhase) -> u8 {
    match phase {
        SessionPhase::Menu => 0,
        SessionPhase::Playing => 1,
        SessionPhase::Paused => 2,
        SessionPhase::SetOver => 3,
        SessionPhase::GameOver => 4,
    }
}

pub fn frame_message(snapshot: &Snapshot) -> ToView {
    let [left, right] = snapshot.paddles;
    ToView::Frame {
        phase: phase_code(snapshot.phase),
        ball_x: snapshot.ball.x,
        ball_y: snapshot.ball.y,
        paddle_left_y: left.y,
        paddle_right_y: right.y,
        score_left: snapshot.score.player1,
        score_right: snapshot.score.player2,
        sets_left: snapshot.sets.player1,
        sets_right: snapshot.sets.player2,
        current_set: snapshot.current_set,
        total_points: snapshot.total_points,
        server: snapshot.server.number(),
        is_deuce: snapshot.is_deuce,
    }
}

pub fn event_message(event: &GameEvent) -> ToView {
    match *event {
        GameEvent::PointScored { player } => ToView::PointScored {
            player: player.number(),
        },
        GameEvent::ServeSwitched { new_server } => ToView::ServeSwitched {
            new_server: new_server.number(),
        },
        GameEvent::SetOver { set, winner, score } => ToView::SetOver {
            set,
            winner: winner.number(),
            score_left: score.player1,
            score_right: score.player2,
        },
        GameEvent::MatchOver { winner, final_sets } => ToView::MatchOver {
            winner: winner.number(),
            sets_left: final_sets.player1,
            sets_right: final_sets.player2,
        },
        GameEvent::PaddleHit { .. } | GameEvent::WallBounce => ToView::Bounce,
    }
}

/// Settings from the fields of an `ApplySettings` command
pub fn parse_settings(
    match_format: u8,
    points_to_win: u16,
    serve_switch_points: u16,
    deuce_serve_switch_points: u16,
    difficulty: &str,
) -> Result<Settings, ConfigError> {
    Ok(Settings {
        match_format,
        points_to_win,
        serve_switch_points,
        deuce_serve_switch_points,
        difficulty: difficulty.parse::<Difficulty>()?,
    })
}

pub fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}
