// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Where log lines are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Stdout,
    Stderr,
}

/// Line-oriented logger, writing to stderr unless told otherwise. Stdout is
/// left to the diagnostics printed for unreadable results files.
///
/// Messages at `Info` and above are tagged with the label, more verbose
/// messages with the module they came from.
pub struct Logger {
    label: Option<&'static str>,
    level: Level,
    output: Output,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: Level::Info,
            output: Output::Stderr,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Install as the global logger. Fails if one is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn max_level(&self) -> LevelFilter {
        self.level.to_level_filter()
    }

    fn format(&self, record: &Record) -> String {
        let target = match self.label {
            Some(label) if record.level() < Level::Debug => label,
            _ => record.target(),
        };
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match self.output {
                Output::Stdout => println!("{}", self.format(record)),
                Output::Stderr => eprintln!("{}", self.format(record)),
            }
        }
    }

    fn flush(&self) {
        use std::io::Write;
        let _ = match self.output {
            Output::Stdout => std::io::stdout().flush(),
            Output::Stderr => std::io::stderr().flush(),
        };
    }
}
