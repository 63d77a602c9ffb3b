use thiserror::Error;

/// Rejected match settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("match format must be an odd best-of count, got {0}")]
    EvenMatchFormat(u8),
    #[error("points to win must be at least 1")]
    ZeroPointsToWin,
    #[error("serve switch points must be at least 1")]
    ZeroServeSwitchPoints,
    #[error("deuce serve switch points must be at least 1")]
    ZeroDeuceServeSwitchPoints,
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("cannot {operation} while {state}")]
    InvalidOperation {
        operation: &'static str,
        state: &'static str,
    },
}

impl GameError {
    pub fn invalid_operation(operation: &'static str, state: &'static str) -> Self {
        GameError::InvalidOperation { operation, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::from(ConfigError::EvenMatchFormat(4));
        assert_eq!(
            err.to_string(),
            "invalid configuration: match format must be an odd best-of count, got 4"
        );

        let err = GameError::invalid_operation("score a point", "the match is over");
        assert_eq!(err.to_string(), "cannot score a point while the match is over");
    }
}
