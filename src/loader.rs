// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Readers for the two results file layouts.
//!
//! The single-series layout holds one reading per line. The grouped layout
//! holds one `<q>,<reading>` pair per line. In both a reading of `-1` marks a
//! trial which never succeeded.

use crate::error::LoadError;
use crate::series::{GroupedSeries, Series};

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read a single-series results file.
pub fn load_single(path: &Path) -> Result<Series, LoadError> {
    let reader = open(path)?;
    let series = read_single(reader)?;
    debug!(
        "{}: {} trials {} successes",
        path.display(),
        series.total(),
        series.successes()
    );
    Ok(series)
}

/// Read a grouped results file.
pub fn load_grouped(path: &Path) -> Result<GroupedSeries, LoadError> {
    let reader = open(path)?;
    let grouped = read_grouped(reader)?;
    debug!("{}: {} groups", path.display(), grouped.len());
    Ok(grouped)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub fn read_single<R: BufRead>(reader: R) -> Result<Series, LoadError> {
    let mut series = Series::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = read_line(line, idx + 1)?;
        let reading = parse_field(line.trim(), idx + 1)?;
        series.record(reading);
    }
    Ok(series)
}

pub fn read_grouped<R: BufRead>(reader: R) -> Result<GroupedSeries, LoadError> {
    let mut grouped = GroupedSeries::new();
    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let line = read_line(line, number)?;

        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 2 {
            return Err(LoadError::Fields {
                line: number,
                content: line.clone(),
            });
        }

        let key = parse_field(fields[0], number)?;
        let reading = parse_field(fields[1], number)?;
        grouped.record(key, reading);
    }
    Ok(grouped)
}

/// Undecodable text is bad content, not a failure to read the file.
fn read_line(line: std::io::Result<String>, number: usize) -> Result<String, LoadError> {
    match line {
        Ok(line) => Ok(line),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(LoadError::Encoding { line: number }),
        Err(e) => Err(LoadError::Io(e)),
    }
}

fn parse_field(field: &str, line: usize) -> Result<i64, LoadError> {
    let field = field.trim();
    field.parse().map_err(|source| LoadError::Parse {
        line,
        content: field.to_string(),
        source,
    })
}
