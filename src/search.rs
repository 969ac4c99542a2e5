use std::cmp::Ordering;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;

use crate::topk::TopK;

/// how many fractions a search retains.
pub const RESULT_CAPACITY: usize = 10;

/// A fraction a/b in lowest terms, together with its signed distance from
/// the search target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub numerator: i64,
    pub denominator: i64,
    /// numerator / denominator - target
    pub deviation: f64,
}

impl Candidate {
    pub fn ratio(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn term_sum(&self) -> i64 {
        self.numerator + self.denominator
    }
}

/// How retained fractions are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// smallest |deviation| wins. the search stops the moment ten fractions
    /// qualify, so this returns the first batch found, not the global best.
    ClosestFirst,
    /// smallest numerator + denominator wins, and the search keeps replacing
    /// the worst entry for the whole time budget.
    MinimalSum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationPolicy {
    EarlyExitOnFull,
    RunToDeadline,
}

impl SelectionMode {
    // the console front-end numbers these 1 and 2
    pub fn from_flag(flag: u8) -> Option<SelectionMode> {
        match flag {
            1 => Some(SelectionMode::ClosestFirst),
            2 => Some(SelectionMode::MinimalSum),
            _ => None,
        }
    }

    pub fn termination(self) -> TerminationPolicy {
        match self {
            SelectionMode::ClosestFirst => TerminationPolicy::EarlyExitOnFull,
            SelectionMode::MinimalSum => TerminationPolicy::RunToDeadline,
        }
    }

    fn ranking(self) -> fn(&Candidate, &Candidate) -> Ordering {
        match self {
            SelectionMode::ClosestFirst => by_deviation,
            SelectionMode::MinimalSum => by_term_sum,
        }
    }
}

fn by_deviation(a: &Candidate, b: &Candidate) -> Ordering {
    OrderedFloat(a.deviation.abs()).cmp(&OrderedFloat(b.deviation.abs()))
}

fn by_term_sum(a: &Candidate, b: &Candidate) -> Ordering {
    a.term_sum().cmp(&b.term_sum())
}

#[derive(Debug, Clone, Copy)]
pub struct SearchParameters {
    pub target: f64,
    pub tolerance: f64,
    pub time_limit: Duration,
    /// reject fractions that undershoot the target
    pub positive_only: bool,
    pub mode: SelectionMode,
}

pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Enumerates denominators 1, 2, 3, .. until the time budget runs out,
/// trying the three numerators nearest target * denominator for each, and
/// retains the ten best coprime fractions within tolerance under the
/// selected ranking. Returns them best first; fewer than ten entries just
/// means the constraints were too tight for the budget.
pub fn search(params: &SearchParameters) -> Vec<Candidate> {
    let mut best = TopK::new(RESULT_CAPACITY, params.mode.ranking());
    let early_exit = params.mode.termination() == TerminationPolicy::EarlyExitOnFull;
    let start = Instant::now();

    let mut denominator: i64 = 1;
    'denominators: loop {
        // one clock read per denominator, not per numerator trial
        if start.elapsed() > params.time_limit {
            break;
        }

        let a_approx = (params.target * denominator as f64).round() as i64;
        for numerator in (a_approx - 1)..=(a_approx + 1) {
            if numerator <= 0 {
                continue;
            }
            if gcd(numerator, denominator) != 1 {
                continue;
            }

            let deviation = numerator as f64 / denominator as f64 - params.target;
            if params.positive_only && deviation < 0.0 {
                continue;
            }
            if deviation.abs() > params.tolerance {
                continue;
            }

            best.offer(Candidate {
                numerator,
                denominator,
                deviation,
            });
            if early_exit && best.is_full() {
                break 'denominators;
            }
        }
        denominator += 1;
    }

    best.into_vec()
}
