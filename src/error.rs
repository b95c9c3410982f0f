// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a results file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid integer {content:?}: {source}")]
    Parse {
        line: usize,
        content: String,
        source: ParseIntError,
    },
    #[error("line {line}: expected \"<q>,<reading>\", found {content:?}")]
    Fields { line: usize, content: String },
    #[error("line {line}: not valid UTF-8")]
    Encoding { line: usize },
}

impl LoadError {
    /// Only failing to access the file is recoverable. Bad content is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LoadError::Open { .. } | LoadError::Io(_))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CdfError {
    #[error("no trials recorded, cannot compute a success probability")]
    NoTrials,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Cdf(#[from] CdfError),
}

impl PipelineError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            PipelineError::Load(e) => e.is_recoverable(),
            PipelineError::Cdf(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize curves: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("could not parse {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
