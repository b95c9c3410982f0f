// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Load, aggregate and render one results file.
//!
//! Failing to open or read the file only skips that chart. Malformed content
//! and empty single-series files terminate the process.

use crate::cdf::Curve;
use crate::config::Config;
use crate::error::PipelineError;
use crate::export;
use crate::loader::{load_grouped, load_single};
use crate::plot::PlotConfig;

use std::fmt;
use std::path::{Path, PathBuf};

/// Thresholds sampled for the single attack curve.
pub const SINGLE_DOMAIN: usize = 1600;
/// Thresholds sampled for each parallel attack curve.
pub const GROUPED_DOMAIN: usize = 400;

pub const SINGLE_LABEL: &str = "Simulation";
pub const SINGLE_X_DESC: &str = "Number of faulty signatures q";
pub const GROUPED_X_DESC: &str = "Number of forgery attempts p";
pub const GROUPED_LEGEND_TITLE: &str = "q";
pub const Y_DESC: &str = "Success probability";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// one reading per line
    Single,
    /// one `<q>,<reading>` pair per line
    Grouped,
}

impl Kind {
    /// in the order they are run
    pub fn all() -> &'static [Kind] {
        &[Kind::Single, Kind::Grouped]
    }

    pub fn domain(self) -> usize {
        match self {
            Kind::Single => SINGLE_DOMAIN,
            Kind::Grouped => GROUPED_DOMAIN,
        }
    }

    pub fn default_input(self) -> &'static str {
        match self {
            Kind::Single => "singleAttackStats.csv",
            Kind::Grouped => "parallelAttackStats.csv",
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            Kind::Single => "singleAttackStats.png",
            Kind::Grouped => "parallelAttackStats.png",
        }
    }

    pub fn default_stem(self) -> &'static str {
        match self {
            Kind::Single => "singleAttackStats",
            Kind::Grouped => "parallelAttackStats",
        }
    }

    fn number(self) -> usize {
        match self {
            Kind::Single => 1,
            Kind::Grouped => 2,
        }
    }

    pub fn plot_config(self) -> PlotConfig {
        let mut plot = PlotConfig::new();
        plot.y_desc(Y_DESC);
        match self {
            Kind::Single => {
                plot.x_desc(SINGLE_X_DESC);
            }
            Kind::Grouped => {
                plot.x_desc(GROUPED_X_DESC).legend_title(GROUPED_LEGEND_TITLE);
            }
        }
        plot
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Single => write!(f, "Single"),
            Kind::Grouped => write!(f, "Parallel"),
        }
    }
}

/// How a pipeline run ended, short of terminating the process.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Disabled,
    /// the results file could not be opened or read
    Unreadable,
    Rendered(PathBuf),
    RenderFailed,
}

/// Load the results file at `path` and sample one curve per series.
pub fn prepare(kind: Kind, path: &Path) -> Result<Vec<Curve>, PipelineError> {
    match kind {
        Kind::Single => {
            let series = load_single(path)?;
            Ok(vec![Curve::new(SINGLE_LABEL, &series, SINGLE_DOMAIN)?])
        }
        Kind::Grouped => {
            let grouped = load_grouped(path)?;
            grouped
                .iter()
                .map(|(q, series)| {
                    Curve::new(q.to_string(), series, GROUPED_DOMAIN).map_err(PipelineError::from)
                })
                .collect()
        }
    }
}

pub fn run(kind: Kind, config: &Config) -> Outcome {
    if !config.enabled(kind) {
        debug!("{}: disabled", kind);
        return Outcome::Disabled;
    }

    let input = config.input(kind);
    let curves = match prepare(kind, &input) {
        Ok(curves) => curves,
        Err(e) if e.is_recoverable() => {
            println!("Error reading results {}", kind.number());
            println!("{}", e);
            return Outcome::Unreadable;
        }
        Err(e) => fatal!("{}: {}: {}", kind, input.display(), e),
    };

    if curves.is_empty() {
        warn!("{}: no results in {}", kind, input.display());
    }
    summarize(kind, &curves);

    if let Some(path) = config.export(kind) {
        match export::write_curves(&path, &curves) {
            Ok(()) => info!("{}: curves written to {}", kind, path.display()),
            Err(e) => error!("{}: {}", kind, e),
        }
    }

    let output = config.output(kind);
    let mut plot = kind.plot_config();
    plot.size(config.size());
    match plot.plot(&output, &curves) {
        Ok(()) => {
            info!("{}: chart written to {}", kind, output.display());
            Outcome::Rendered(output)
        }
        Err(e) => {
            error!("{}: failed to render {}: {}", kind, output.display(), e);
            Outcome::RenderFailed
        }
    }
}

/// One line per curve: the counts, the success rate at the end of the domain
/// and the threshold at which half of the trials have succeeded.
pub fn summary(curve: &Curve) -> String {
    let cdf = curve.cdf();
    let median = cdf
        .first_reaching(0.5)
        .map(|x| x.to_string())
        .unwrap_or_else(|| format!("not reached below {}", cdf.domain()));
    format!(
        "{}: Trials: {} Successes: {} Success rate: {:.4} Median: {}",
        curve.label(),
        curve.trials(),
        curve.successes(),
        cdf.final_probability(),
        median
    )
}

fn summarize(kind: Kind, curves: &[Curve]) {
    for curve in curves {
        info!("{}: {}", kind, summary(curve));
    }
}
