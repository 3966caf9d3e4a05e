//! Offline preview of the task mix.
//!
//! Draws task selections by weight and builds the matching requests without
//! contacting a server. Useful for checking payloads before pointing the
//! load test at a live backend, and for confirming the table's weights give
//! the intended traffic shares.

use crate::auth::Credentials;
use crate::requests::RequestTemplate;
use crate::tasks::{self, Task, TASKS};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::RngCore;
use std::fmt;

/// Expected share of one task in the overall traffic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightShare {
    pub task: &'static str,
    pub weight: usize,
    /// `weight / total_weight`, in `[0, 1]`.
    pub share: f64,
}

/// Each task's expected share, in table order.
pub fn weight_shares() -> Vec<WeightShare> {
    let total = tasks::total_weight() as f64;
    TASKS
        .iter()
        .map(|task| WeightShare {
            task: task.name,
            weight: task.weight,
            share: task.weight as f64 / total,
        })
        .collect()
}

/// Error building the selection distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The task weights do not form a valid distribution.
    InvalidWeights(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidWeights(reason) => write!(f, "invalid task weights: {reason}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Result of [`sample`].
#[derive(Debug, Clone)]
pub struct PlanSample {
    /// Selections per task, in table order.
    pub counts: Vec<(&'static str, usize)>,
    /// The first requests drawn, up to the `keep` limit.
    pub requests: Vec<(&'static str, RequestTemplate)>,
    pub total: usize,
}

impl PlanSample {
    /// Observed share of `task`, or `None` for an unknown task or an empty sample.
    pub fn observed_share(&self, task: &str) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        self.counts
            .iter()
            .find(|(name, _)| *name == task)
            .map(|(_, count)| *count as f64 / self.total as f64)
    }

    pub fn count(&self, task: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| *name == task)
            .map_or(0, |(_, count)| *count)
    }
}

/// Draw `count` weighted task selections and build each one's request,
/// keeping the first `keep` requests.
pub fn sample(
    count: usize,
    keep: usize,
    credentials: &Credentials,
    rng: &mut dyn RngCore,
) -> Result<PlanSample, PlanError> {
    let index = WeightedIndex::new(TASKS.iter().map(|task| task.weight))
        .map_err(|e| PlanError::InvalidWeights(e.to_string()))?;

    let mut counts = vec![0usize; TASKS.len()];
    let mut requests = Vec::with_capacity(keep.min(count));
    for _ in 0..count {
        let i = index.sample(rng);
        let task: &'static Task = &TASKS[i];
        let template = task.request(credentials, rng);
        counts[i] += 1;
        if requests.len() < keep {
            requests.push((task.name, template));
        }
    }

    Ok(PlanSample {
        counts: TASKS.iter().map(|t| t.name).zip(counts).collect(),
        requests,
        total: count,
    })
}
