/*!
A queue of clauses to be examined for a consequence.

Whenever the watches of a clause are updated after some atom is valued, the status of the clause is calculated.
If the clause is unit, or the clause is unsatisfied, the key of the clause is pushed to the back of the queue.

[Propagation](crate::procedures::bcp) then pops keys from the front of the queue and recalculates the status of each clause, as the valuation may have been extended since the key was queued.
So, a key on the queue is only a suggestion that the clause may be unit, and stale keys are dropped.

The queue is cleared whenever a conflict is found, and whenever the solve backtracks.
*/

use crate::{context::GenericContext, db::ClauseKey};

/// A queue of clauses to be examined for a consequence.
pub type ConsequenceQ = std::collections::VecDeque<ClauseKey>;

impl<R: rand::Rng> GenericContext<R> {
    /// Pushes a key to the back of the consequence queue.
    pub fn enqueue(&mut self, key: ClauseKey) {
        self.consequence_q.push_back(key);
    }

    /// Clears the consequence queue.
    pub fn clear_q(&mut self) {
        self.consequence_q.clear();
    }
}
