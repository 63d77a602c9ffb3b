//! Messages between the simulation and the page that draws it
//!
//! Uses postcard for compact binary serialization

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// ToView Messages (Simulation to View)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ToView {
    /// Everything needed to draw one frame
    Frame {
        phase: u8, // 0 menu, 1 playing, 2 paused, 3 set over, 4 game over
        ball_x: f32,
        ball_y: f32,
        paddle_left_y: f32,
        paddle_right_y: f32,
        score_left: u16,
        score_right: u16,
        sets_left: u8,
        sets_right: u8,
        current_set: u8,
        total_points: u32,
        server: u8, // 1 = left, 2 = right
        is_deuce: bool,
    },

    PointScored {
        player: u8,
    },

    ServeSwitched {
        new_server: u8,
    },

    SetOver {
        set: u8,
        winner: u8,
        score_left: u16,
        score_right: u16,
    },

    MatchOver {
        winner: u8,
        sets_left: u8,
        sets_right: u8,
    },

    /// Sound cue for a ball bounce
    Bounce,
}

// ============================================================================
// FromView Messages (View to Simulation)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FromView {
    Start,
    TogglePause,
    /// Restart the current set
    Reset,
    /// Restart the whole match
    NewGame,
    ApplySettings {
        match_format: u8,
        points_to_win: u16,
        serve_switch_points: u16,
        deuce_serve_switch_points: u16,
        difficulty: String,
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl ToView {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl FromView {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

/// A batch of messages produced by one tick
pub fn encode_batch(messages: &[ToView]) -> Result<Vec<u8>, postcard::Error> {
    to_allocvec(messages)
}

pub fn decode_batch(bytes: &[u8]) -> Result<Vec<ToView>, postcard::Error> {
    from_bytes(bytes)
}
