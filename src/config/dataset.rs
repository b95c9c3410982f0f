// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_derive::Deserialize;

/// Where a pipeline reads its results and writes its chart. Unset paths fall
/// back to the pipeline's builtin file names.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    input: Option<String>,
    output: Option<String>,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

impl Dataset {
    pub fn input(&self) -> Option<String> {
        self.input.clone()
    }

    pub fn set_input(&mut self, path: Option<String>) {
        self.input = path;
    }

    pub fn output(&self) -> Option<String> {
        self.output.clone()
    }

    pub fn set_output(&mut self, path: Option<String>) {
        self.output = path;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for Dataset {
    fn default() -> Dataset {
        Dataset {
            input: None,
            output: None,
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
