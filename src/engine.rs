use std::fmt;

use itertools::Itertools;

use crate::error::NimError;

/// Starting position used when no piles are given.
pub const DEFAULT_PILES: [u8; 4] = [1, 3, 5, 7];

/// Either 0 or 1.
pub type PlayerId = u8;

/// Remove `count` objects from pile `pile` (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    pub pile: usize,
    pub count: u8,
}

impl Action {
    pub fn new(pile: usize, count: u8) -> Self {
        Action { pile, count }
    }
}

impl From<(usize, u8)> for Action {
    fn from((pile, count): (usize, u8)) -> Self {
        Action { pile, count }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

/// Enumerates every legal action for a pile configuration.
///
/// Ordered by pile index, then by count, so callers iterating the result get
/// the same order on every call.
pub fn available_actions(piles: &[u8]) -> Vec<Action> {
    piles
        .iter()
        .enumerate()
        .flat_map(|(pile, &size)| (1..=size).map(move |count| Action { pile, count }))
        .collect()
}

pub fn other_player(player: PlayerId) -> PlayerId {
    debug_assert!(player < 2);
    if player == 1 {
        0
    } else {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    piles: Vec<u8>,
    current_player: PlayerId,
    winner: Option<PlayerId>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(&DEFAULT_PILES)
    }
}

impl GameState {
    /// Player 0 moves first. A position with nothing left is already won
    /// by the player to move.
    pub fn new(piles: &[u8]) -> Self {
        let mut state = GameState {
            piles: piles.to_vec(),
            current_player: 0,
            winner: None,
        };
        state.record_winner();
        state
    }

    pub fn piles(&self) -> &[u8] {
        &self.piles
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn available_actions(&self) -> Vec<Action> {
        available_actions(&self.piles)
    }

    pub fn switch_player(&mut self) {
        self.current_player = other_player(self.current_player);
    }

    /// Applies `action` for the current player. The state is unchanged on error.
    ///
    /// Whoever empties the last pile loses: the opponent, now to move, wins.
    pub fn apply_move(&mut self, action: Action) -> Result<(), NimError> {
        if self.winner.is_some() {
            return Err(NimError::GameAlreadyWon);
        }
        let num_piles = self.piles.len();
        let available = *self.piles.get(action.pile).ok_or(NimError::InvalidPile {
            pile: action.pile,
            num_piles,
        })?;
        if action.count < 1 || action.count > available {
            return Err(NimError::InvalidCount {
                pile: action.pile,
                count: action.count,
                available,
            });
        }

        self.piles[action.pile] -= action.count;
        self.switch_player();
        self.record_winner();
        Ok(())
    }

    fn record_winner(&mut self) {
        if self.piles.iter().all(|&pile| pile == 0) {
            self.winner = Some(self.current_player);
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .piles
            .iter()
            .enumerate()
            .map(|(i, pile)| format!("Pile {}: {}", i, pile))
            .join("\n");
        write!(f, "{}", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_actions_counts() {
        let configs: [&[u8]; 5] = [&[1, 3, 5, 7], &[0, 0], &[], &[2], &[0, 4, 0, 1]];
        for piles in configs {
            let actions = available_actions(piles);
            let total: usize = piles.iter().map(|&p| p as usize).sum();
            assert_eq!(total, actions.len());
            for (i, &size) in piles.iter().enumerate() {
                for j in 1..=size {
                    assert!(actions.contains(&Action::new(i, j)), "missing ({}, {})", i, j);
                }
            }
            assert!(actions
                .iter()
                .all(|a| a.count >= 1 && a.count <= piles[a.pile]));
        }
    }

    #[test]
    fn test_available_actions_order() {
        let actions = available_actions(&[2, 0, 1]);
        assert_eq!(
            vec![Action::new(0, 1), Action::new(0, 2), Action::new(2, 1)],
            actions
        );
    }

    #[test]
    fn test_other_player() {
        assert_eq!(1, other_player(0));
        assert_eq!(0, other_player(1));
        for p in 0..2 {
            assert_eq!(p, other_player(other_player(p)));
        }
    }

    #[test]
    fn test_fresh_game() {
        let state = GameState::default();
        assert_eq!(&[1, 3, 5, 7], state.piles());
        assert_eq!(0, state.current_player());
        assert_eq!(None, state.winner());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_single_pile_win() {
        let mut state = GameState::new(&[1]);
        state.apply_move(Action::new(0, 1)).unwrap();
        assert_eq!(&[0], state.piles());
        assert_eq!(1, state.current_player());
        // Taking the last object hands the win to the opponent
        assert_eq!(Some(1), state.winner());

        let result = state.apply_move(Action::new(0, 1));
        assert_eq!(Err(NimError::GameAlreadyWon), result);
    }

    #[test]
    fn test_two_pile_scenario() {
        let mut state = GameState::new(&[1, 1]);
        state.apply_move((0, 1).into()).unwrap();
        assert_eq!(&[0, 1], state.piles());
        assert_eq!(None, state.winner());
        assert_eq!(1, state.current_player());

        state.apply_move((1, 1).into()).unwrap();
        assert_eq!(&[0, 0], state.piles());
        assert_eq!(0, state.current_player());
        assert_eq!(Some(0), state.winner());
    }

    #[test]
    fn test_empty_position_is_terminal() {
        for piles in [&[0u8, 0][..], &[][..]] {
            let mut state = GameState::new(piles);
            assert!(state.is_terminal());
            assert_eq!(Some(0), state.winner());
            assert!(state.available_actions().is_empty());
            assert_eq!(
                Err(NimError::GameAlreadyWon),
                state.apply_move(Action::new(0, 1))
            );
        }
    }

    #[test]
    fn test_illegal_moves() {
        let mut state = GameState::default();

        let result = state.apply_move(Action::new(4, 1));
        assert_eq!(
            Err(NimError::InvalidPile {
                pile: 4,
                num_piles: 4
            }),
            result
        );

        let result = state.apply_move(Action::new(1, 0));
        assert!(matches!(result, Err(NimError::InvalidCount { .. })));

        let result = state.apply_move(Action::new(1, 4));
        assert_eq!(
            Err(NimError::InvalidCount {
                pile: 1,
                count: 4,
                available: 3
            }),
            result
        );

        // Nothing changed
        assert_eq!(GameState::default(), state);
    }

    #[test]
    fn test_display() {
        let state = GameState::new(&[1, 0]);
        assert_eq!("Pile 0: 1\nPile 1: 0", state.to_string());
    }
}
