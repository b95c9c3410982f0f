// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cdf::Curve;
use crate::error::ExportError;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the sampled curves to `path` as pretty-printed JSON, creating the
/// parent directory if necessary.
pub fn write_curves(path: &Path, curves: &[Curve]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, curves)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    #[test]
    fn json_layout() {
        let mut series = Series::new();
        series.record(0);
        series.record(-1);
        let curve = Curve::new("Simulation", &series, 2).unwrap();

        let value = serde_json::to_value(&[curve]).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "label": "Simulation",
                "trials": 2,
                "successes": 1,
                "samples": [
                    { "x": 0, "probability": 0.0 },
                    { "x": 1, "probability": 0.5 },
                ],
            }])
        );
    }
}
