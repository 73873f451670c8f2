use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::Rng;

use nim_qlearner::{
    Action, AgentConfig, GameState, Player, PlayerId, Trainer, TrainerConfig, DEFAULT_PILES,
};

/// Train a Nim agent by self-play, then play against it.
#[derive(Parser)]
#[command(name = "qlearner", about = "Train a Nim Q-learning agent and play against it")]
struct Cli {
    /// Number of self-play training games
    #[arg(long, default_value_t = 10000)]
    games: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Exploration probability during training
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Seed for the agent's random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Initial pile sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    piles: Option<Vec<u8>>,

    /// Move first (0) or second (1); random if omitted
    #[arg(long)]
    human_player: Option<PlayerId>,

    /// Pause between turns, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn read_human_action(state: &GameState, input: &mut impl BufRead) -> Result<Action> {
    let available = state.available_actions();
    loop {
        let pile = prompt("Choose Pile: ", input)?;
        let count = prompt("Choose Count: ", input)?;
        if let (Ok(pile), Ok(count)) = (pile.parse::<usize>(), count.parse::<u8>()) {
            let action = Action::new(pile, count);
            if available.contains(&action) {
                return Ok(action);
            }
        }
        println!("Invalid move, try again.");
    }
}

fn prompt(message: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn play(
    ai: &mut impl Player,
    piles: &[u8],
    human_player: PlayerId,
    delay: Duration,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::new(piles);

    loop {
        println!();
        println!("Piles:");
        println!("{}", state);
        println!();
        thread::sleep(delay);

        let action = if state.current_player() == human_player {
            println!("Your Turn");
            read_human_action(&state, &mut input)?
        } else {
            println!("AI's Turn");
            let action = ai.play_turn(&state)?;
            println!("AI chose to take {} from pile {}.", action.count, action.pile);
            action
        };

        state.apply_move(action)?;

        if let Some(winner) = state.winner() {
            println!();
            println!("GAME OVER");
            let name = if winner == human_player { "Human" } else { "AI" };
            println!("Winner is {}", name);
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Some(player) = cli.human_player {
        if player > 1 {
            bail!("--human-player must be 0 or 1, got {}", player);
        }
    }

    let config = TrainerConfig {
        agent: AgentConfig {
            alpha: cli.alpha,
            epsilon: cli.epsilon,
        },
        initial_piles: cli.piles.unwrap_or_else(|| DEFAULT_PILES.to_vec()),
        seed: cli.seed,
        ..TrainerConfig::default()
    };
    let trainer = Trainer::new(config).context("invalid training configuration")?;
    let mut ai = trainer
        .train(cli.games)
        .with_context(|| format!("training for {} games", cli.games))?;

    let human_player = cli
        .human_player
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..=1));
    info!("Human plays as player {}", human_player);

    play(
        &mut ai,
        &trainer.config().initial_piles,
        human_player,
        Duration::from_millis(cli.delay_ms),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_human_input_retries_until_legal() {
        let state = GameState::new(&[1, 3]);
        // Out of range pile, too many objects, garbage, then a legal move
        let mut input = Cursor::new("5\n1\n1\n4\nx\n1\n1\n2\n");
        let action = read_human_action(&state, &mut input).unwrap();
        assert_eq!(Action::new(1, 2), action);
    }

    #[test]
    fn test_human_input_closed() {
        let state = GameState::new(&[1]);
        let mut input = Cursor::new("0\n");
        assert!(read_human_action(&state, &mut input).is_err());
    }
}
