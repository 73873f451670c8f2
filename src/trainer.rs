//! Self-play training. One agent plays both sides, since Nim is symmetric
//! and a single policy covers either seat.

use log::{debug, info};

use crate::config::TrainerConfig;
use crate::engine::{other_player, Action, GameState};
use crate::error::{ConfigError, NimError};
use crate::players::qlearning_player::QLearningPlayer;

/// Reward for the move that empties the last pile.
const FINAL_MOVE_REWARD: f64 = -1.0;
/// Reward for the opponent's move that preceded it.
const SETUP_MOVE_REWARD: f64 = 1.0;

#[derive(Debug, Clone)]
struct LastMove {
    state: Vec<u8>,
    action: Action,
}

pub struct Trainer {
    config: TrainerConfig,
}

impl Default for Trainer {
    fn default() -> Self {
        Trainer {
            config: TrainerConfig::default(),
        }
    }
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Trainer { config })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Plays `num_games` full self-play games and returns the trained agent.
    pub fn train(&self, num_games: usize) -> Result<QLearningPlayer, NimError> {
        let agent_config = self.config.agent;
        let mut player = match self.config.seed {
            Some(seed) => QLearningPlayer::new(agent_config, seed),
            None => QLearningPlayer::from_entropy(agent_config),
        }?;

        info!(
            "Training for {} games (alpha {}, epsilon {}, piles {:?})",
            num_games, agent_config.alpha, agent_config.epsilon, self.config.initial_piles
        );

        for game in 0..num_games {
            let interval = self.config.progress_interval;
            if interval > 0 && (game + 1) % interval == 0 {
                info!("Playing training game {}/{}", game + 1, num_games);
            }
            self.play_episode(&mut player, game)?;
        }

        info!(
            "Done training: {} games, {} state-action values learned",
            num_games,
            player.q_table().len()
        );
        Ok(player)
    }

    fn play_episode(&self, player: &mut QLearningPlayer, game: usize) -> Result<(), NimError> {
        let mut state = GameState::new(&self.config.initial_piles);
        let mut last: [Option<LastMove>; 2] = [None, None];
        let mut plies = 0;

        loop {
            let old_piles = state.piles().to_vec();
            let mover = state.current_player();
            let action = player.choose_action(&old_piles, true)?;
            last[mover as usize] = Some(LastMove {
                state: old_piles.clone(),
                action,
            });

            state.apply_move(action)?;
            plies += 1;
            let new_piles = state.piles();

            let opponent = other_player(mover) as usize;
            if let Some(winner) = state.winner() {
                player.update(&old_piles, action, new_piles, FINAL_MOVE_REWARD);
                if let Some(setup) = &last[opponent] {
                    player.update(&setup.state, setup.action, new_piles, SETUP_MOVE_REWARD);
                }
                debug!("Game {} over after {} plies, winner {}", game + 1, plies, winner);
                return Ok(());
            }

            if let Some(previous) = &last[opponent] {
                player.update(&previous.state, previous.action, new_piles, 0.0);
            }
        }
    }
}

/// Trains an agent with the default configuration.
pub fn train(num_games: usize) -> Result<QLearningPlayer, NimError> {
    Trainer::default().train(num_games)
}
