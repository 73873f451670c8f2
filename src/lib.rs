//! Tabular Q-learning for Nim, trained by self-play.

pub mod config;
pub mod engine;
pub mod error;
pub mod players;
pub mod trainer;

pub use config::{AgentConfig, TrainerConfig};
pub use engine::{available_actions, other_player, Action, GameState, PlayerId, DEFAULT_PILES};
pub use error::{ConfigError, NimError};
pub use players::player::Player;
pub use players::q_table::ActionValueTable;
pub use players::qlearning_player::QLearningPlayer;
pub use trainer::{train, Trainer};
