//! Browser bindings for the table tennis simulation
//!
//! The page owns drawing and timing; this crate owns the game. Each animation
//! frame the page calls `tick` and gets back a postcard batch of `ToView`
//! messages ending with a `Frame`.

mod bridge;
mod input;

pub use bridge::*;
pub use input::*;

use game_core::{GameError, GameRng, Session, SessionPhase, Settings};
use proto::{encode_batch, FromView, ToView};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct TableTennis {
    session: Session,
    keys: KeyState,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TableTennis {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: f64) -> Result<TableTennis, String> {
        let session = Session::new(Settings::default(), GameRng::new(seed as u64))
            .map_err(|e| e.to_string())?;
        Ok(Self {
            session,
            keys: KeyState::new(),
        })
    }

    /// Returns true when the key is bound to a game action
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.handle_key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.handle_key_up(key)
    }

    pub fn blur(&mut self) {
        self.keys.release_all();
    }

    /// Advance by `dt` seconds and return this tick's messages
    pub fn tick(&mut self, dt: f32) -> Result<Vec<u8>, String> {
        let input = self.keys.input_state();
        let mut messages: Vec<ToView> = self
            .session
            .advance(dt, &input)
            .iter()
            .map(event_message)
            .collect();
        messages.push(frame_message(&self.session.snapshot()));

        encode_batch(&messages).map_err(|e| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("Failed to encode frame: {:?}", e).into());
            format!("Failed to encode frame: {:?}", e)
        })
    }

    /// Apply a postcard-encoded `FromView` command
    pub fn command(&mut self, bytes: &[u8]) -> Result<(), String> {
        let command = FromView::from_bytes(bytes).map_err(|e| format!("Bad command: {:?}", e))?;
        self.apply(command)
    }

    /// Phase code as used in `Frame` messages
    pub fn phase(&self) -> u8 {
        phase_code(self.session.phase())
    }

    /// Overlay text for the match winner, empty while the match is live
    pub fn winner_label(&self) -> String {
        if self.session.phase() != SessionPhase::GameOver {
            return String::new();
        }
        self.session
            .umpire()
            .state()
            .winner
            .map(|winner| format!("{} Wins!", player_label(winner)))
            .unwrap_or_default()
    }

    pub fn difficulty(&self) -> String {
        self.session.settings().difficulty.as_str().to_string()
    }
}

impl TableTennis {
    pub fn apply(&mut self, command: FromView) -> Result<(), String> {
        let result = match command {
            FromView::Start => self.session.start(),
            FromView::TogglePause => self.session.toggle_pause().map(|_| ()),
            FromView::Reset => self.session.reset(),
            FromView::NewGame => self.session.new_game(),
            FromView::ApplySettings {
                match_format,
                points_to_win,
                serve_switch_points,
                deuce_serve_switch_points,
                difficulty,
            } => parse_settings(
                match_format,
                points_to_win,
                serve_switch_points,
                deuce_serve_switch_points,
                &difficulty,
            )
            .map_err(GameError::from)
            .and_then(|settings| self.session.apply_settings(settings)),
        };
        result.map_err(|e| e.to_string())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::decode_batch;

    #[test]
    fn test_tick_ends_with_frame() {
        let mut game = TableTennis::new(1.0).unwrap();
        let batch = decode_batch(&game.tick(0.016).unwrap()).unwrap();
        assert_eq!(batch.len(), 1);
        match &batch[0] {
            ToView::Frame {
                phase,
                score_left,
                current_set,
                server,
                ..
            } => {
                assert_eq!(*phase, 0);
                assert_eq!(*score_left, 0);
                assert_eq!(*current_set, 1);
                assert_eq!(*server, 1);
            }
            other => panic!("expected a frame, got {:?}", other),
        }
    }

    #[test]
    fn test_space_starts_and_pauses() {
        let mut game = TableTennis::new(2.0).unwrap();
        assert!(game.key_down(" "));
        game.tick(0.016).unwrap();
        assert_eq!(game.phase(), 1);

        game.key_up(" ");
        game.tick(0.016).unwrap();
        game.key_down(" ");
        game.tick(0.016).unwrap();
        assert_eq!(game.phase(), 2);
    }

    #[test]
    fn test_commands() {
        let mut game = TableTennis::new(3.0).unwrap();
        game.command(&FromView::Start.to_bytes().unwrap()).unwrap();
        assert_eq!(game.phase(), 1);
        assert!(game.command(&FromView::Start.to_bytes().unwrap()).is_err());

        let settings = FromView::ApplySettings {
            match_format: 3,
            points_to_win: 21,
            serve_switch_points: 5,
            deuce_serve_switch_points: 1,
            difficulty: "hard".to_string(),
        };
        game.command(&settings.to_bytes().unwrap()).unwrap();
        assert_eq!(game.phase(), 0);
        assert_eq!(game.difficulty(), "hard");
        assert_eq!(game.session().settings().points_to_win, 21);

        let even = FromView::ApplySettings {
            match_format: 4,
            points_to_win: 11,
            serve_switch_points: 2,
            deuce_serve_switch_points: 1,
            difficulty: "easy".to_string(),
        };
        assert!(game.command(&even.to_bytes().unwrap()).is_err());
        assert_eq!(game.difficulty(), "hard", "rejected settings change nothing");

        let unknown = FromView::ApplySettings {
            match_format: 5,
            points_to_win: 11,
            serve_switch_points: 2,
            deuce_serve_switch_points: 1,
            difficulty: "impossible".to_string(),
        };
        let err = game.command(&unknown.to_bytes().unwrap()).unwrap_err();
        assert!(err.contains("impossible"), "{err}");

        assert!(game.command(&[0xff]).is_err());
        assert_eq!(game.winner_label(), "");
    }
}
