/*!
A geometric schedule of restarts.

The schedule counts conflicts towards a goal.
Before a conflict is counted, the schedule is asked whether a restart is [due](Geometric::restart_due), i.e. whether the count has reached the goal.
If so, the count is reset and the goal grows by a (fixed) factor, rounded up.

Separately, the count may be reset without growth of the goal --- this is done whenever a solve backjumps to the first decision level of its own accord, as the backjump has the effect of a restart.

Every conflict is [counted](Geometric::count), after any reset.
So, with a goal of *n* the first restart is due on conflict *n + 1*.

```rust
# use heron_sat::generic::geometric::Geometric;
let mut schedule = Geometric::new(2, 1.5);
let mut due = vec![];
for _ in 0..6 {
    due.push(schedule.restart_due());
    schedule.count();
}

assert_eq!(due, vec![false, false, true, false, false, true]);
assert_eq!(schedule.goal(), 5);
```
*/

/// Representation used for counts of conflicts in the schedule.
pub type GeometricRepresentation = u32;

/// A schedule of restarts, whose goal grows geometrically.
#[derive(Clone, Debug)]
pub struct Geometric {
    goal: GeometricRepresentation,
    counter: GeometricRepresentation,
    factor: f64,
}

impl Geometric {
    pub fn new(goal: GeometricRepresentation, factor: f64) -> Self {
        Geometric {
            goal,
            counter: 0,
            factor,
        }
    }

    /// Returns true if the count has reached the goal.
    ///
    /// If so, the count is reset and the goal grows.
    pub fn restart_due(&mut self) -> bool {
        if self.counter < self.goal {
            return false;
        }

        self.counter = 0;
        let grown = (self.goal as f64 * self.factor).ceil();
        self.goal = match grown < GeometricRepresentation::MAX as f64 {
            true => grown as GeometricRepresentation,
            false => GeometricRepresentation::MAX,
        };
        true
    }

    /// Counts a conflict.
    pub fn count(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Resets the count, without growth of the goal.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    pub fn goal(&self) -> GeometricRepresentation {
        self.goal
    }

    pub fn counter(&self) -> GeometricRepresentation {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A conflict without a backjump to level one.
    fn conflict(schedule: &mut Geometric) -> bool {
        let due = schedule.restart_due();
        schedule.count();
        due
    }

    #[test]
    fn first_goals() {
        let mut schedule = Geometric::new(500, 1.2);

        for _ in 0..500 {
            assert!(!conflict(&mut schedule));
        }
        assert!(conflict(&mut schedule));
        assert_eq!(schedule.goal(), 600);
        assert_eq!(schedule.counter(), 1);

        for _ in 0..599 {
            assert!(!conflict(&mut schedule));
        }
        assert!(conflict(&mut schedule));
        assert_eq!(schedule.goal(), 720);
    }

    #[test]
    fn goal_growth_rounds_up() {
        let mut schedule = Geometric::new(3, 1.2);
        let mut previous = schedule.goal();

        for _ in 0..64 {
            while !conflict(&mut schedule) {}
            assert!(schedule.goal() as f64 >= previous as f64 * 1.2);
            assert!(schedule.goal() > previous);
            previous = schedule.goal();
        }
    }

    #[test]
    fn reset_keeps_goal() {
        let mut schedule = Geometric::new(4, 2.0);

        for _ in 0..3 {
            assert!(!conflict(&mut schedule));
        }

        // A backjump to level one is still a conflict.
        schedule.reset();
        schedule.count();
        assert_eq!(schedule.goal(), 4);
        assert_eq!(schedule.counter(), 1);

        for _ in 0..3 {
            assert!(!conflict(&mut schedule));
        }
        assert!(conflict(&mut schedule));
        assert_eq!(schedule.goal(), 8);
    }

    #[test]
    fn saturates() {
        let mut schedule = Geometric::new(GeometricRepresentation::MAX - 1, 2.0);
        schedule.counter = GeometricRepresentation::MAX - 1;

        assert!(schedule.restart_due());
        assert_eq!(schedule.goal(), GeometricRepresentation::MAX);

        schedule.counter = GeometricRepresentation::MAX;
        schedule.count();
        assert_eq!(schedule.counter(), GeometricRepresentation::MAX);
    }
}
