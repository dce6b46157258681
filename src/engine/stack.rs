// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The frame arena of one IDA* search.

use crate::cubie::constants::MAX_DEPTH;
use crate::cubie::{Move, MoveSet};
use crate::state::CoordCube;

/// One position on the search path.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub cube: CoordCube,
    /// The move that produced `cube`; for the root, the move before the search began.
    pub last_move: Option<Move>,
    /// Index of the next candidate in the phase's move list.
    cursor: usize,
}

impl Frame {
    pub fn new(cube: CoordCube, last_move: Option<Move>) -> Self {
        Self {
            cube,
            last_move,
            cursor: 0,
        }
    }

    /// Advance to the next untried move that is neither blacklisted nor on
    /// the same face as `last_move`.
    pub fn next_move(&mut self, moves: &[Move], blacklist: MoveSet) -> Option<Move> {
        while let Some(&mv) = moves.get(self.cursor) {
            self.cursor += 1;
            if blacklist.contains(mv) {
                continue;
            }
            if self.last_move.is_some_and(|last| last.is_same_face(mv)) {
                continue;
            }
            return Some(mv);
        }
        None
    }
}

/// Frames from the root (index 0) to the current node.
///
/// Capacity is fixed at `MAX_DEPTH + 1`, so a search never reallocates.
#[derive(Debug, Clone)]
pub struct SearchStack {
    frames: Vec<Frame>,
}

impl SearchStack {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(MAX_DEPTH + 1),
        }
    }

    /// Drop every frame and start again from `root`.
    pub fn reset(&mut self, root: Frame) {
        self.frames.clear();
        self.frames.push(Frame::new(root.cube, root.last_move));
    }

    pub fn push(&mut self, frame: Frame) {
        assert!(
            self.frames.len() <= MAX_DEPTH,
            "search stack overflow at depth {}",
            self.frames.len()
        );
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Moves taken from the root to the top frame.
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// The moves from the root to the top frame.
    pub fn path(&self) -> Vec<Move> {
        self.frames
            .iter()
            .skip(1)
            .filter_map(|frame| frame.last_move)
            .collect()
    }
}

impl Default for SearchStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::Face;

    #[test]
    fn test_next_move_skips_same_face() {
        let mut frame = Frame::new(CoordCube::SOLVED, Some(Move::U2));
        let first = frame.next_move(&Move::ALL, MoveSet::EMPTY);
        assert_eq!(first, Some(Move::R1));
        let rest: Vec<Move> =
            std::iter::from_fn(|| frame.next_move(&Move::ALL, MoveSet::EMPTY)).collect();
        assert_eq!(rest.len(), 14);
        assert!(rest.iter().all(|mv| mv.face() != Face::U));
    }

    #[test]
    fn test_next_move_skips_blacklist() {
        let mut blacklist = MoveSet::EMPTY;
        blacklist.insert_face(Face::R);
        blacklist.insert(Move::D2);
        let mut frame = Frame::new(CoordCube::SOLVED, None);
        let moves: Vec<Move> =
            std::iter::from_fn(|| frame.next_move(&Move::PHASE2, blacklist)).collect();
        assert_eq!(
            moves,
            vec![Move::U1, Move::U2, Move::U3, Move::F2, Move::D1, Move::D3, Move::L2, Move::B2]
        );
    }

    #[test]
    fn test_path() {
        let mut stack = SearchStack::new();
        stack.reset(Frame::new(CoordCube::SOLVED, Some(Move::F1)));
        assert_eq!(stack.depth(), 0);
        assert!(stack.path().is_empty());
        stack.push(Frame::new(CoordCube::SOLVED, Some(Move::R2)));
        stack.push(Frame::new(CoordCube::SOLVED, Some(Move::U3)));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.path(), vec![Move::R2, Move::U3]);
        stack.pop();
        assert_eq!(stack.path(), vec![Move::R2]);
    }

    #[test]
    #[should_panic(expected = "search stack overflow")]
    fn test_overflow() {
        let mut stack = SearchStack::new();
        stack.reset(Frame::new(CoordCube::SOLVED, None));
        for _ in 0..=MAX_DEPTH {
            stack.push(Frame::new(CoordCube::SOLVED, None));
        }
    }
}
