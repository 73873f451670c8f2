/// Errors raised by the game engine and the agent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NimError {
    #[error("game already won")]
    GameAlreadyWon,

    #[error("invalid pile {pile} (game has {num_piles} piles)")]
    InvalidPile { pile: usize, num_piles: usize },

    #[error("invalid count {count} for pile {pile} (pile holds {available})")]
    InvalidCount { pile: usize, count: u8, available: u8 },

    #[error("no available actions in a terminal position")]
    NoAvailableActions,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nim_error_display() {
        let err = NimError::InvalidPile {
            pile: 7,
            num_piles: 4,
        };
        assert_eq!(err.to_string(), "invalid pile 7 (game has 4 piles)");

        let err = NimError::InvalidCount {
            pile: 1,
            count: 4,
            available: 3,
        };
        assert_eq!(err.to_string(), "invalid count 4 for pile 1 (pile holds 3)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("alpha must be in (0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: alpha must be in (0, 1]"
        );
    }
}
