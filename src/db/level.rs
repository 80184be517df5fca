/*!
A database of decision levels.

Each level is a [Frame], recording the decision made to open the level (if any) and each atom valued at the level, in the order the atoms were valued.

The first frame is level zero.
No decision is made at level zero, and any atom valued at level zero is valued by consequence of the formula alone.
So, level zero is never discarded.

The database mirrors the [atom database](crate::db::atom): an atom is recorded in the frame of a level exactly when the atom is valued at that level.
*/

use crate::{
    db::LevelIndex,
    structures::{atom::Atom, literal::CLiteral},
};

/// A decision level.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// The decision which opened the level, absent for level zero.
    decision: Option<CLiteral>,

    /// The atoms valued at the level, in order.
    assigned: Vec<Atom>,
}

impl Frame {
    pub fn decision(&self) -> Option<CLiteral> {
        self.decision
    }

    pub fn assigned(&self) -> &[Atom] {
        &self.assigned
    }
}

/// The level database.
#[derive(Clone, Debug)]
pub struct LevelDB {
    frames: Vec<Frame>,
}

impl Default for LevelDB {
    fn default() -> Self {
        LevelDB {
            frames: vec![Frame::default()],
        }
    }
}

impl LevelDB {
    /// The current decision level.
    pub fn current_level(&self) -> LevelIndex {
        (self.frames.len() - 1) as LevelIndex
    }

    /// Opens a fresh level for the given decision, and returns the index of the level.
    pub fn open(&mut self, decision: CLiteral) -> LevelIndex {
        self.frames.push(Frame {
            decision: Some(decision),
            assigned: Vec::default(),
        });
        self.current_level()
    }

    /// Records the atom as valued on the current level.
    pub fn record(&mut self, atom: Atom) {
        if let Some(frame) = self.frames.last_mut() {
            frame.assigned.push(atom);
        }
    }

    /// Removes the top frame, so long as the top frame is not level zero.
    pub fn pop(&mut self) -> Option<Frame> {
        match self.frames.len() {
            1 => None,
            _ => self.frames.pop(),
        }
    }

    /// The frame of the given level, if the level is open.
    pub fn frame(&self, level: LevelIndex) -> Option<&Frame> {
        self.frames.get(level as usize)
    }

    /// The decisions made, in order.
    pub fn decisions(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.frames.iter().filter_map(|frame| frame.decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_stays() {
        let mut levels = LevelDB::default();
        levels.record(1);
        assert!(levels.pop().is_none());

        assert_eq!(levels.open(-2), 1);
        levels.record(2);
        levels.record(3);
        assert_eq!(levels.current_level(), 1);

        let frame = levels.pop();
        assert!(frame.is_some_and(|frame| frame.decision() == Some(-2) && frame.assigned() == [2, 3]));
        assert_eq!(levels.current_level(), 0);
        assert_eq!(levels.frame(0).map(|frame| frame.assigned().len()), Some(1));
    }
}
