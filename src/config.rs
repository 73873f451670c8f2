use crate::engine::DEFAULT_PILES;
use crate::error::ConfigError;

/// Hyperparameters of the Q-learning agent. Fixed for the lifetime of the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Learning rate, in (0, 1].
    pub alpha: f64,
    /// Exploration probability, in [0, 1].
    pub epsilon: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            alpha: 0.5,
            epsilon: 0.1,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::Validation(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub agent: AgentConfig,
    pub initial_piles: Vec<u8>,
    /// Seeds the agent's generator. `None` draws a seed from the OS.
    pub seed: Option<u64>,
    /// Log progress every this many games; 0 disables it.
    pub progress_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            agent: AgentConfig::default(),
            initial_piles: DEFAULT_PILES.to_vec(),
            seed: None,
            progress_interval: 1000,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.agent.validate()?;
        if self.initial_piles.iter().all(|&pile| pile == 0) {
            return Err(ConfigError::Validation(
                "initial piles must hold at least one object".to_string(),
            ));
        }
        Ok(())
    }
}
