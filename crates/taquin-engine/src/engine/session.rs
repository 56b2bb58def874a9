use std::collections::VecDeque;

use crate::{
    IllegalMoveError,
    core::{Board, Move, Position},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Solved,
}

/// One game in progress: the owned current board plus move bookkeeping.
///
/// The session holds exactly one [`Board`] value and replaces it wholesale
/// on every move, so there is never shared mutable puzzle state for a
/// presentation layer to corrupt. An auto-solve sequence can be queued and
/// then consumed one move at a time, which is the hook an animation driver
/// calls on its own schedule.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    moves: usize,
    pending_solution: VecDeque<Move>,
}

impl GameSession {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            pending_solution: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied since the session started.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.board.is_solved() {
            SessionState::Solved
        } else {
            SessionState::Playing
        }
    }

    /// Starts a new game on `board`, resetting the move counter and
    /// dropping any queued solution.
    pub fn restart(&mut self, board: Board) {
        self.board = board;
        self.moves = 0;
        self.pending_solution.clear();
    }

    /// Applies one move, replacing the owned board.
    ///
    /// A manual move invalidates whatever solution was queued for the
    /// previous configuration.
    pub fn apply_move(&mut self, direction: Move) -> Result<(), IllegalMoveError> {
        let board = self.board.apply(direction)?;
        self.board = board;
        self.moves += 1;
        self.pending_solution.clear();
        Ok(())
    }

    /// Slides the tile at `position` into the blank, the tap-a-tile entry
    /// point. Returns the move that happened, or `None` when that tile is
    /// not adjacent to the blank.
    pub fn slide_tile(&mut self, position: Position) -> Option<Move> {
        let direction = self.board.move_for_tile(position)?;
        self.apply_move(direction)
            .expect("a tile adjacent to the blank can always slide");
        Some(direction)
    }

    /// Queues an auto-solve path for [`Self::step_solution`] to consume.
    ///
    /// The whole sequence is checked against the current board first, so
    /// stepping through it later cannot fail halfway.
    pub fn queue_solution(&mut self, moves: Vec<Move>) -> Result<(), IllegalMoveError> {
        let mut preview = self.board.clone();
        for &direction in &moves {
            preview = preview.apply(direction)?;
        }
        self.pending_solution = moves.into();
        Ok(())
    }

    /// Number of queued auto-solve moves not yet applied.
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.pending_solution.len()
    }

    /// Applies and returns the next queued auto-solve move, or `None` once
    /// the queue is empty.
    pub fn step_solution(&mut self) -> Option<Move> {
        let direction = self.pending_solution.pop_front()?;
        let board = self
            .board
            .apply(direction)
            .expect("queued solutions are validated against the board");
        self.board = board;
        self.moves += 1;
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_counted() {
        let start = Board::SOLVED.apply(Move::Up).unwrap();
        let mut session = GameSession::new(start);
        assert_eq!(session.moves(), 0);
        assert!(session.state().is_playing());

        session.apply_move(Move::Down).unwrap();
        assert_eq!(session.moves(), 1);
        assert!(session.state().is_solved());
        assert!(session.is_solved());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = GameSession::new(Board::SOLVED.apply(Move::Up).unwrap());
        session.apply_move(Move::Down).unwrap();
        let next = Board::SOLVED.apply(Move::Left).unwrap();
        session.restart(next.clone());
        assert_eq!(session.moves(), 0);
        assert_eq!(*session.board(), next);
    }

    #[test]
    fn test_slide_tile_maps_to_a_move() {
        let mut session = GameSession::new(Board::SOLVED);
        // Tile 15 sits left of the blank.
        assert_eq!(session.slide_tile(Position::new(3, 2)), Some(Move::Left));
        assert_eq!(session.moves(), 1);

        // A far-away tile does nothing.
        let before = session.board().clone();
        assert_eq!(session.slide_tile(Position::new(0, 0)), None);
        assert_eq!(*session.board(), before);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_queued_solution_steps_to_solved() {
        let start = Board::SOLVED
            .apply(Move::Up)
            .unwrap()
            .apply(Move::Left)
            .unwrap();
        let mut session = GameSession::new(start);
        session
            .queue_solution(vec![Move::Right, Move::Down])
            .unwrap();
        assert_eq!(session.pending_moves(), 2);

        assert_eq!(session.step_solution(), Some(Move::Right));
        assert_eq!(session.step_solution(), Some(Move::Down));
        assert_eq!(session.step_solution(), None);
        assert!(session.is_solved());
        assert_eq!(session.moves(), 2);
    }

    #[test]
    fn test_invalid_solution_is_rejected_whole() {
        let mut session = GameSession::new(Board::SOLVED);
        // The second move walks off the bottom edge.
        let result = session.queue_solution(vec![Move::Up, Move::Down, Move::Down]);
        assert!(result.is_err());
        assert_eq!(session.pending_moves(), 0);
        assert!(session.board().is_solved());
    }

    #[test]
    fn test_manual_move_drops_queued_solution() {
        let start = Board::SOLVED
            .apply(Move::Up)
            .unwrap()
            .apply(Move::Left)
            .unwrap();
        let mut session = GameSession::new(start);
        session
            .queue_solution(vec![Move::Right, Move::Down])
            .unwrap();
        session.apply_move(Move::Up).unwrap();
        assert_eq!(session.pending_moves(), 0);
    }
}
