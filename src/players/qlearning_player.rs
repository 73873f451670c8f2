use log::trace;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::config::AgentConfig;
use crate::engine::{self, Action, GameState};
use crate::error::{ConfigError, NimError};
use crate::players::player::Player;
use crate::players::q_table::ActionValueTable;

/// Tabular Q-learning agent with no discounting.
#[derive(Debug, Clone)]
pub struct QLearningPlayer {
    q_table: ActionValueTable,
    alpha: f64,
    epsilon: f64,
    rng: SplitMix64,
}

impl Default for QLearningPlayer {
    fn default() -> Self {
        QLearningPlayer {
            q_table: ActionValueTable::new(),
            alpha: AgentConfig::default().alpha,
            epsilon: AgentConfig::default().epsilon,
            rng: SplitMix64::from_entropy(),
        }
    }
}

impl QLearningPlayer {
    /// Seeded agent; the same seed and the same calls give the same choices.
    pub fn new(config: AgentConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SplitMix64::seed_from_u64(seed))
    }

    pub fn from_entropy(config: AgentConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SplitMix64::from_entropy())
    }

    fn with_rng(config: AgentConfig, rng: SplitMix64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(QLearningPlayer {
            q_table: ActionValueTable::new(),
            alpha: config.alpha,
            epsilon: config.epsilon,
            rng,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn q_table(&self) -> &ActionValueTable {
        &self.q_table
    }

    pub fn get_q_value(&self, state: &[u8], action: Action) -> f64 {
        self.q_table.get(state, action)
    }

    /// One-step update: Q(s, a) += alpha * (reward + max_a' Q(s', a') - Q(s, a)).
    pub fn update(&mut self, old_state: &[u8], action: Action, new_state: &[u8], reward: f64) {
        let old = self.q_table.get(old_state, action);
        let best_future = self.best_future_reward(new_state);
        let new = old + self.alpha * ((reward + best_future) - old);
        trace!(
            "Q({:?}, {:?}): {} -> {} (reward {}, future {})",
            old_state,
            action,
            old,
            new,
            reward,
            best_future
        );
        self.q_table.set(old_state, action, new);
    }

    /// Highest value over the actions available in `state`, or 0.0 when there are none.
    pub fn best_future_reward(&self, state: &[u8]) -> f64 {
        engine::available_actions(state)
            .into_iter()
            .map(|action| self.q_table.get(state, action))
            .fold(None, |best: Option<f64>, value| match best {
                Some(b) if b >= value => Some(b),
                _ => Some(value),
            })
            .unwrap_or(0.0)
    }

    /// Greedy choice. Ties go to the first maximal action in `available_actions` order.
    pub fn best_action(&self, state: &[u8]) -> Result<Action, NimError> {
        self.greedy_action(state, &engine::available_actions(state))
            .ok_or(NimError::NoAvailableActions)
    }

    fn greedy_action(&self, state: &[u8], actions: &[Action]) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for &action in actions {
            let value = self.q_table.get(state, action);
            match best {
                Some((_, best_value)) if best_value >= value => {}
                _ => best = Some((action, value)),
            }
        }
        best.map(|(action, _)| action)
    }

    /// With `explore`, picks a uniformly random legal action with probability
    /// epsilon and the greedy action otherwise. Without it, always greedy.
    pub fn choose_action(&mut self, state: &[u8], explore: bool) -> Result<Action, NimError> {
        let actions = engine::available_actions(state);

        if explore && self.rng.gen::<f64>() < self.epsilon {
            if let Some(&action) = actions.choose(&mut self.rng) {
                return Ok(action);
            }
        }

        self.greedy_action(state, &actions)
            .ok_or(NimError::NoAvailableActions)
    }
}

impl Player for QLearningPlayer {
    fn play_turn(&mut self, state: &GameState) -> Result<Action, NimError> {
        self.choose_action(state.piles(), false)
    }
}
