// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::CdfError;
use crate::series::Series;

use serde_derive::Serialize;
use superslice::Ext as _;

use std::cmp::Ordering;

/// Probability that a trial succeeded before threshold `x`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub x: i64,
    pub probability: f64,
}

/// An empirical cumulative distribution sampled at the integer thresholds
/// `0..domain`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmpiricalCdf {
    samples: Vec<Sample>,
}

impl EmpiricalCdf {
    /// Sample the fraction of `total` trials whose reading is strictly below
    /// each threshold.
    ///
    /// The readings are sorted once and swept with a cursor which never moves
    /// backwards, so the result is non-decreasing.
    pub fn sample(readings: &[i64], total: u64, domain: usize) -> Result<Self, CdfError> {
        if total == 0 {
            return Err(CdfError::NoTrials);
        }

        let mut sorted = readings.to_vec();
        sorted.sort_unstable();

        let total = total as f64;
        let mut samples = Vec::with_capacity(domain);
        let mut i = 0;
        for x in 0..domain as i64 {
            while i < sorted.len() && sorted[i] < x {
                i += 1;
            }
            samples.push(Sample {
                x,
                probability: i as f64 / total,
            });
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn domain(&self) -> usize {
        self.samples.len()
    }

    pub fn probability(&self, x: i64) -> Option<f64> {
        if x < 0 {
            return None;
        }
        self.samples.get(x as usize).map(|s| s.probability)
    }

    /// Probability at the last sampled threshold.
    pub fn final_probability(&self) -> f64 {
        self.samples.last().map(|s| s.probability).unwrap_or(0.0)
    }

    pub fn max_probability(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.probability)
            .fold(0.0, f64::max)
    }

    /// The smallest threshold at which the probability is at least `p`.
    pub fn first_reaching(&self, p: f64) -> Option<i64> {
        let idx = self.samples.lower_bound_by(|s| {
            s.probability.partial_cmp(&p).unwrap_or(Ordering::Less)
        });
        self.samples.get(idx).map(|s| s.x)
    }
}

/// A labelled distribution, together with the counts it was computed from.
#[derive(Clone, Debug, Serialize)]
pub struct Curve {
    label: String,
    trials: u64,
    successes: u64,
    samples: EmpiricalCdf,
}

impl Curve {
    pub fn new(label: impl Into<String>, series: &Series, domain: usize) -> Result<Self, CdfError> {
        Ok(Self {
            label: label.into(),
            trials: series.total(),
            successes: series.successes(),
            samples: EmpiricalCdf::sample(series.readings(), series.total(), domain)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn cdf(&self) -> &EmpiricalCdf {
        &self.samples
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .samples()
            .iter()
            .map(|s| (s.x as f64, s.probability))
    }
}
