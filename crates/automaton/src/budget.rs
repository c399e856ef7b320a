use std::time::Duration;
use std::time::Instant;

/// Bounds the amount of work of an exhaustive search. The search calls
/// [SearchBudget::step] once for every node it expands and stops as soon as it
/// returns false.
pub trait SearchBudget {
    fn step(&mut self) -> bool;
}

/// A budget that never runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl SearchBudget for Unlimited {
    fn step(&mut self) -> bool {
        true
    }
}

/// Allows at most the given number of steps.
#[derive(Clone, Copy, Debug)]
pub struct StepLimit {
    remaining: usize,
}

impl StepLimit {
    pub fn new(limit: usize) -> StepLimit {
        StepLimit { remaining: limit }
    }
}

impl SearchBudget for StepLimit {
    fn step(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        true
    }
}

/// Allows steps until the given point in time.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    deadline: Instant,
    steps: usize,
}

impl Deadline {
    /// The clock is only consulted every this many steps.
    const CHECK_INTERVAL: usize = 1024;

    pub fn new(deadline: Instant) -> Deadline {
        Deadline { deadline, steps: 0 }
    }

    pub fn after(timeout: Duration) -> Deadline {
        Deadline::new(Instant::now() + timeout)
    }
}

impl SearchBudget for Deadline {
    fn step(&mut self) -> bool {
        self.steps += 1;
        self.steps % Self::CHECK_INTERVAL != 0 || Instant::now() < self.deadline
    }
}
