//! Game session: one match on one table, advanced a tick at a time.

use hecs::World;
use tracing::{debug, error, warn};

use crate::systems::*;
use crate::{
    create_ball, create_paddle, Ball, Config, Events, GameError, GameEvent, GameRng, InputState,
    Paddle, PaddleIntent, Params, Player, PointOutcome, Score, SetCount, SetRecord, Settings,
    Table, Time, Umpire,
};

/// Session control state, separate from match progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Menu,
    Playing,
    Paused,
    SetOver,
    GameOver,
}

impl SessionPhase {
    fn describe(self) -> &'static str {
        match self {
            SessionPhase::Menu => "in the menu",
            SessionPhase::Playing => "playing",
            SessionPhase::Paused => "paused",
            SessionPhase::SetOver => "between sets",
            SessionPhase::GameOver => "the game is over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub table: Table,
    pub ball: BallView,
    pub paddles: [PaddleView; 2], // player one, player two
    pub score: Score,
    pub sets: SetCount,
    pub current_set: u8,
    pub total_points: u32,
    pub server: Player,
    pub is_deuce: bool,
    pub elapsed: f32, // seconds of play in this match
    pub phase: SessionPhase,
    pub match_winner: Option<Player>,
    pub history: Vec<SetRecord>,
}

pub struct Session {
    world: World,
    time: Time,
    config: Config,
    table: Table,
    umpire: Umpire,
    events: Events,
    rng: GameRng,
    phase: SessionPhase,
    last_input: InputState,
}

impl Session {
    pub fn new(settings: Settings, rng: GameRng) -> Result<Self, GameError> {
        Self::with_config(settings, Config::default(), rng)
    }

    pub fn with_config(
        settings: Settings,
        config: Config,
        rng: GameRng,
    ) -> Result<Self, GameError> {
        let umpire = Umpire::new(settings)?;
        let table = Table::from_config(&config);

        let mut world = World::new();
        create_paddle(&mut world, Player::One, &config);
        world.spawn((
            Paddle::new(Player::Two, &config),
            PaddleIntent::new(),
            AiControlled,
        ));
        create_ball(&mut world, table.center(), glam::Vec2::ZERO, &config);

        Ok(Self {
            world,
            time: Time::new(Params::FIXED_DT, 0.0),
            config,
            table,
            umpire,
            events: Events::new(),
            rng,
            phase: SessionPhase::Menu,
            last_input: InputState::new(),
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        self.umpire.settings()
    }

    pub fn umpire(&self) -> &Umpire {
        &self.umpire
    }

    /// Events from the most recent `advance`
    pub fn events(&self) -> &[GameEvent] {
        self.events.as_slice()
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    /// Begin play from the menu or resume after a set
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            SessionPhase::Menu | SessionPhase::SetOver => {
                let server = self.umpire.serve().server;
                serve_ball(&mut self.world, server, &self.config, &self.table, &mut self.rng);
                self.set_phase(SessionPhase::Playing);
                Ok(())
            }
            phase => Err(GameError::invalid_operation("start", phase.describe())),
        }
    }

    pub fn toggle_pause(&mut self) -> Result<SessionPhase, GameError> {
        match self.phase {
            SessionPhase::Playing => self.set_phase(SessionPhase::Paused),
            SessionPhase::Paused => self.set_phase(SessionPhase::Playing),
            phase => return Err(GameError::invalid_operation("toggle pause", phase.describe())),
        }
        Ok(self.phase)
    }

    /// Restart the current set. Sets already played are kept.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.umpire.reset_set()?;
        self.rack();
        Ok(())
    }

    /// Fresh match with the current settings
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let settings = *self.umpire.settings();
        self.apply_settings(settings)
    }

    /// Fresh match with new settings. Invalid settings leave the session untouched.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), GameError> {
        self.umpire.new_game(settings)?;
        self.time = Time::default();
        self.rack();
        Ok(())
    }

    /// Centre paddles and ball, back to the menu
    fn rack(&mut self) {
        let rest_y = self.config.paddle_rest_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = rest_y;
        }
        park_ball(&mut self.world, &self.table);
        self.set_phase(SessionPhase::Menu);
    }

    /// Advance the session by `dt` seconds
    pub fn advance(&mut self, dt: f32, input: &InputState) -> &[GameEvent] {
        self.events.clear();
        self.handle_controls(input);
        self.last_input = *input;

        if self.phase != SessionPhase::Playing {
            return self.events.as_slice();
        }

        // Clamp dt to prevent large jumps
        let clamped_dt = dt.clamp(0.0, Params::MAX_DT);

        ingest_inputs(&mut self.world, input);

        // Fixed micro-steps for stable physics
        let mut remaining_dt = clamped_dt;
        while remaining_dt > 1e-6 && self.phase == SessionPhase::Playing {
            let step_dt = remaining_dt.min(Params::FIXED_DT);
            remaining_dt -= step_dt;
            self.time = Time::new(step_dt, self.time.now + step_dt);
            self.step();
        }

        self.events.as_slice()
    }

    fn handle_controls(&mut self, input: &InputState) {
        let reset_pressed = input.reset && !self.last_input.reset;
        let toggle_pressed = input.toggle_pause && !self.last_input.toggle_pause;

        if reset_pressed {
            if let Err(err) = self.reset() {
                warn!(%err, "reset ignored");
            }
        }

        if toggle_pressed {
            let result = match self.phase {
                SessionPhase::Menu | SessionPhase::SetOver => self.start(),
                _ => self.toggle_pause().map(|_| ()),
            };
            if let Err(err) = result {
                warn!(%err, "pause key ignored");
            }
        }
    }

    fn step(&mut self) {
        move_paddles(&mut self.world, &self.time, &self.table);
        drive_ai_paddles(
            &mut self.world,
            self.umpire.settings().difficulty,
            &self.time,
            &mut self.rng,
            &self.table,
        );

        match move_ball(&mut self.world, &self.time, &self.table) {
            Some(BallEvent::OutOfBounds { conceded }) => {
                self.point_conceded(conceded);
                return;
            }
            Some(BallEvent::WallBounce) => self.events.push(GameEvent::WallBounce),
            None => {}
        }

        check_collisions(&mut self.world, &self.config, &mut self.events);
    }

    fn point_conceded(&mut self, conceded: Player) {
        let result = award_point(
            &mut self.world,
            &mut self.umpire,
            conceded,
            &self.config,
            &self.table,
            &mut self.rng,
            &mut self.events,
        );

        match result {
            Ok(PointOutcome::Rally) => {}
            Ok(PointOutcome::SetWon(_)) => self.set_phase(SessionPhase::SetOver),
            Ok(PointOutcome::MatchWon(_)) => self.set_phase(SessionPhase::GameOver),
            Err(err) => {
                error!(%err, "point scored outside a live match");
                self.set_phase(SessionPhase::GameOver);
            }
        }
    }

    /// Render-ready copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
            })
            .unwrap_or(BallView {
                x: self.table.center().x,
                y: self.table.center().y,
                radius: self.config.ball_radius,
            });

        let mut paddles = [Player::One, Player::Two].map(|player| PaddleView {
            x: self.config.paddle_x(player),
            y: self.config.paddle_rest_y(),
            width: self.config.paddle_width,
            height: self.config.paddle_height,
        });
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let slot = match paddle.player {
                Player::One => 0,
                Player::Two => 1,
            };
            paddles[slot] = PaddleView {
                x: paddle.x,
                y: paddle.y,
                width: paddle.width,
                height: paddle.height,
            };
        }

        let state = self.umpire.state();
        let serve = self.umpire.serve();
        Snapshot {
            table: self.table,
            ball,
            paddles,
            score: self.umpire.score(),
            sets: state.sets,
            current_set: state.current_set,
            total_points: state.total_points,
            server: serve.server,
            is_deuce: serve.is_deuce,
            elapsed: self.time.now,
            phase: self.phase,
            match_winner: state.winner,
            history: state.history.clone(),
        }
    }
}
