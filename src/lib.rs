// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Empirical success probability curves for fault-injection forgery
//! experiments.
//!
//! Each results file is loaded into per-series readings, swept into an
//! empirical CDF over a fixed range of attempt counts and drawn as a line
//! chart.

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod cdf;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logger;
pub mod pipeline;
pub mod plot;
pub mod series;

pub use crate::cdf::{Curve, EmpiricalCdf, Sample};
pub use crate::config::Config;
pub use crate::error::*;
pub use crate::logger::{Logger, Output};
pub use crate::pipeline::{Kind, Outcome};
pub use crate::series::{GroupedSeries, Series, NO_SUCCESS};
