use crate::{PaddleIntent, Player};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Points within the current set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u16,
    pub player2: u16,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u16 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    /// Set winner: at least `points_to_win` and two clear points
    pub fn has_winner(&self, points_to_win: u16) -> Option<Player> {
        if self.player1 >= points_to_win && self.player1 >= self.player2 + 2 {
            Some(Player::One)
        } else if self.player2 >= points_to_win && self.player2 >= self.player1 + 2 {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Sets won in the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetCount {
    pub player1: u8,
    pub player2: u8,
}

impl SetCount {
    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }
}

/// Logical actions held down during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    pub toggle_pause: bool,
    pub reset: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement requested for `player`'s paddle
    pub fn intent(&self, player: Player) -> PaddleIntent {
        match player {
            Player::One => PaddleIntent::from_keys(self.p1_up, self.p1_down),
            Player::Two => PaddleIntent::from_keys(self.p2_up, self.p2_down),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, 1)`
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Notifications for the view layer, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PointScored {
        player: Player,
    },
    ServeSwitched {
        new_server: Player,
    },
    SetOver {
        set: u8,
        winner: Player,
        score: Score,
    },
    MatchOver {
        winner: Player,
        final_sets: SetCount,
    },
    PaddleHit {
        player: Player,
    },
    WallBounce,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.player1, 0);
        score.increment(Player::One);
        score.increment(Player::One);
        score.increment(Player::Two);
        assert_eq!(score.get(Player::One), 2);
        assert_eq!(score.get(Player::Two), 1);
    }

    #[test]
    fn test_score_has_winner_needs_two_clear_points() {
        let score = Score {
            player1: 11,
            player2: 10,
        };
        assert_eq!(score.has_winner(11), None, "11-10 is not a win");

        let score = Score {
            player1: 12,
            player2: 10,
        };
        assert_eq!(score.has_winner(11), Some(Player::One), "12-10 is a win");

        let score = Score {
            player1: 9,
            player2: 11,
        };
        assert_eq!(score.has_winner(11), Some(Player::Two), "9-11 is a win");
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            player1: 10,
            player2: 0,
        };
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_single_point_sets_still_need_a_lead() {
        let score = Score {
            player1: 1,
            player2: 0,
        };
        assert_eq!(score.has_winner(1), None);
        let score = Score {
            player1: 2,
            player2: 0,
        };
        assert_eq!(score.has_winner(1), Some(Player::One));
    }

    #[test]
    fn test_set_count_increment() {
        let mut sets = SetCount::default();
        sets.increment(Player::Two);
        assert_eq!(sets.get(Player::Two), 1);
        assert_eq!(sets.get(Player::One), 0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..10 {
            let x = a.unit();
            assert_eq!(x, b.unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_input_intent_per_player() {
        let input = InputState {
            p1_up: true,
            p2_down: true,
            ..InputState::new()
        };
        assert_eq!(input.intent(Player::One).dir, -1);
        assert_eq!(input.intent(Player::Two).dir, 1);
        assert!(!InputState::new().intent(Player::Two).is_active());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.push(GameEvent::WallBounce);
        events.push(GameEvent::PointScored {
            player: Player::One,
        });
        assert_eq!(events.as_slice().len(), 2);

        events.clear();
        assert!(events.is_empty());
    }
}
