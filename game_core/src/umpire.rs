//! Match state machine: points make sets, sets make a match.

use tracing::{debug, info};

use crate::serve::{self, ServeState};
use crate::{Events, GameError, GameEvent, Player, Score, SetCount, Settings};

/// A finished set. Never modified after it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRecord {
    pub set: u8,
    pub score: Score,
    pub winner: Player,
}

/// Match progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub sets: SetCount,
    pub history: Vec<SetRecord>,
    pub current_set: u8, // 1-based
    pub total_points: u32,
    pub winner: Option<Player>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            sets: SetCount::default(),
            history: Vec::new(),
            current_set: 1,
            total_points: 0,
            winner: None,
        }
    }
}

/// What a point led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Set continues; serve again
    Rally,
    /// Set finished, next set ready to start
    SetWon(SetRecord),
    /// Set finished and with it the match
    MatchWon(SetRecord),
}

/// Applies the scoring rules for one match
#[derive(Debug, Clone)]
pub struct Umpire {
    settings: Settings,
    score: Score,
    serve: ServeState,
    state: MatchState,
}

impl Umpire {
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let score = Score::new();
        Ok(Self {
            settings,
            score,
            serve: ServeState::for_score(Player::One, &score, settings.points_to_win),
            state: MatchState::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn serve(&self) -> ServeState {
        self.serve
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_match_over(&self) -> bool {
        self.state.winner.is_some()
    }

    /// Award a point to `player`
    pub fn score_point(
        &mut self,
        player: Player,
        events: &mut Events,
    ) -> Result<PointOutcome, GameError> {
        if self.is_match_over() {
            return Err(GameError::invalid_operation(
                "score a point",
                "the match is over",
            ));
        }

        let server_before = self.serve.server;

        self.score.increment(player);
        self.state.total_points += 1;
        self.serve = serve::on_point_scored(self.serve, &self.score, &self.settings);
        events.push(GameEvent::PointScored { player });

        let outcome = match self.score.has_winner(self.settings.points_to_win) {
            None => PointOutcome::Rally,
            Some(winner) => self.finish_set(winner, events),
        };

        if !matches!(outcome, PointOutcome::MatchWon(_)) && self.serve.server != server_before {
            events.push(GameEvent::ServeSwitched {
                new_server: self.serve.server,
            });
        }
        if let PointOutcome::MatchWon(record) = outcome {
            events.push(GameEvent::MatchOver {
                winner: record.winner,
                final_sets: self.state.sets,
            });
        }

        Ok(outcome)
    }

    fn finish_set(&mut self, winner: Player, events: &mut Events) -> PointOutcome {
        let record = SetRecord {
            set: self.state.current_set,
            score: self.score,
            winner,
        };
        self.state.history.push(record);
        self.state.sets.increment(winner);
        events.push(GameEvent::SetOver {
            set: record.set,
            winner,
            score: record.score,
        });

        info!(
            set = record.set,
            winner = winner.number(),
            player1 = record.score.player1,
            player2 = record.score.player2,
            "set over"
        );

        if self.state.sets.get(winner) >= self.settings.sets_to_win() {
            self.state.winner = Some(winner);
            info!(
                winner = winner.number(),
                sets1 = self.state.sets.player1,
                sets2 = self.state.sets.player2,
                "match over"
            );
            return PointOutcome::MatchWon(record);
        }

        self.state.current_set += 1;
        self.score = Score::new();
        self.serve = self.fresh_serve(self.serve.server.other());
        PointOutcome::SetWon(record)
    }

    fn fresh_serve(&self, server: Player) -> ServeState {
        ServeState::for_score(server, &self.score, self.settings.points_to_win)
    }

    /// Clear the current set only; sets, history and server are kept
    pub fn reset_set(&mut self) -> Result<(), GameError> {
        if self.is_match_over() {
            return Err(GameError::invalid_operation(
                "reset the set",
                "the match is over",
            ));
        }
        self.score = Score::new();
        self.serve = self.fresh_serve(self.serve.server);
        debug!(set = self.state.current_set, "set reset");
        Ok(())
    }

    /// Start a fresh match, discarding all history
    pub fn new_game(&mut self, settings: Settings) -> Result<(), GameError> {
        settings.validate()?;
        self.settings = settings;
        self.score = Score::new();
        self.serve = self.fresh_serve(Player::One);
        self.state = MatchState::default();
        debug!(
            match_format = settings.match_format,
            points_to_win = settings.points_to_win,
            "new game"
        );
        Ok(())
    }
}
