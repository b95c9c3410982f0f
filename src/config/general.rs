// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::Level;
use serde_derive::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(with = "LevelDef")]
    #[serde(default = "default_logging_level")]
    logging: Level,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    export: Option<String>,
}

impl General {
    pub fn logging(&self) -> Level {
        self.logging
    }

    pub fn set_logging(&mut self, level: Level) {
        self.logging = level;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, pixels: u32) {
        self.width = pixels;
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, pixels: u32) {
        self.height = pixels;
    }

    pub fn export(&self) -> Option<String> {
        self.export.clone()
    }

    pub fn set_export(&mut self, directory: Option<String>) {
        self.export = directory;
    }
}

impl Default for General {
    fn default() -> General {
        General {
            logging: default_logging_level(),
            width: default_width(),
            height: default_height(),
            export: None,
        }
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
#[serde(remote = "Level")]
#[serde(deny_unknown_fields)]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_logging_level() -> Level {
    Level::Info
}
