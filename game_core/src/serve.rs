//! Serve rotation and deuce detection.
//!
//! Everything here is a pure function of the score and settings, so a serve
//! sequence can be replayed from a list of point winners alone.

use crate::{Player, Score, Settings};

/// Who serves, and how far through their service turn they are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeState {
    pub server: Player,
    pub points_in_service: u16,
    pub is_deuce: bool,
}

impl ServeState {
    pub fn new(server: Player) -> Self {
        Self {
            server,
            points_in_service: 0,
            is_deuce: false,
        }
    }

    /// Fresh service turn for `server` with the deuce flag taken from `score`
    pub fn for_score(server: Player, score: &Score, points_to_win: u16) -> Self {
        Self {
            is_deuce: is_deuce(score, points_to_win),
            ..Self::new(server)
        }
    }
}

impl Default for ServeState {
    fn default() -> Self {
        Self::new(Player::One)
    }
}

/// Both players within one point of the target
pub fn is_deuce(score: &Score, points_to_win: u16) -> bool {
    let threshold = points_to_win.saturating_sub(1);
    score.player1 >= threshold && score.player2 >= threshold
}

/// Serve state after a point has been added to `score`
pub fn on_point_scored(serve: ServeState, score: &Score, settings: &Settings) -> ServeState {
    let mut next = serve;
    next.points_in_service += 1;

    let was_deuce = serve.is_deuce;
    next.is_deuce = is_deuce(score, settings.points_to_win);

    // Entering deuce starts a fresh cadence
    if next.is_deuce && !was_deuce {
        next.points_in_service = 0;
    }

    let threshold = if next.is_deuce {
        settings.deuce_serve_switch_points
    } else {
        settings.serve_switch_points
    };

    if next.points_in_service >= threshold {
        next.server = next.server.other();
        next.points_in_service = 0;
    }

    next
}
