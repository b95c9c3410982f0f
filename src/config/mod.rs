// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod dataset;
mod general;

pub use self::dataset::Dataset;
pub use self::general::General;

use crate::error::ConfigError;
use crate::pipeline::Kind;

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{App, Arg, ArgMatches};
use log::Level;
use serde_derive::Deserialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    single: Dataset,
    #[serde(default)]
    parallel: Dataset,
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        match Self::from_args(std::env::args_os()) {
            Ok(config) => config,
            Err(ConfigError::Cli(e)) => e.exit(),
            Err(e) => {
                println!("ERROR: {}", e);
                process::exit(1);
            }
        }
    }

    /// build a `Config` from an explicit argument list, the first element
    /// being the program name
    pub fn from_args<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;

        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)?
        } else {
            Default::default()
        };

        config.apply(&matches)?;
        Ok(config)
    }

    pub fn load_from_file(file: &str) -> Result<Config, ConfigError> {
        let read_err = |source| ConfigError::Read {
            path: file.to_string(),
            source,
        };
        let mut content = String::new();
        std::fs::File::open(file)
            .and_then(|mut f| f.read_to_string(&mut content))
            .map_err(read_err)?;
        Config::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply(&mut self, matches: &ArgMatches) -> Result<(), ConfigError> {
        if let Some(input) = matches.value_of("single") {
            self.single.set_input(Some(input.to_string()));
        }
        if let Some(output) = matches.value_of("single-output") {
            self.single.set_output(Some(output.to_string()));
        }
        if matches.is_present("skip-single") {
            self.single.set_enabled(false);
        }

        if let Some(input) = matches.value_of("parallel") {
            self.parallel.set_input(Some(input.to_string()));
        }
        if let Some(output) = matches.value_of("parallel-output") {
            self.parallel.set_output(Some(output.to_string()));
        }
        if matches.is_present("skip-parallel") {
            self.parallel.set_enabled(false);
        }

        if let Some(width) = parse_numeric_arg(matches, "width")? {
            self.general.set_width(width);
        }
        if let Some(height) = parse_numeric_arg(matches, "height")? {
            self.general.set_height(height);
        }

        if let Some(export) = matches.value_of("export") {
            self.general.set_export(Some(export.to_string()));
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => self.general.set_logging(Level::Debug),
            _ => self.general.set_logging(Level::Trace),
        }

        Ok(())
    }

    /// get logging level
    pub fn logging(&self) -> Level {
        self.general.logging()
    }

    /// chart dimensions in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.general.width(), self.general.height())
    }

    pub fn dataset(&self, kind: Kind) -> &Dataset {
        match kind {
            Kind::Single => &self.single,
            Kind::Grouped => &self.parallel,
        }
    }

    pub fn enabled(&self, kind: Kind) -> bool {
        self.dataset(kind).enabled()
    }

    pub fn input(&self, kind: Kind) -> PathBuf {
        self.dataset(kind)
            .input()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(kind.default_input()))
    }

    pub fn output(&self, kind: Kind) -> PathBuf {
        self.dataset(kind)
            .output()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(kind.default_output()))
    }

    /// where to write the sampled curves, named after the chart
    pub fn export(&self, kind: Kind) -> Option<PathBuf> {
        let directory = self.general.export()?;
        let stem = self
            .output(kind)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| kind.default_stem().to_string());
        Some(Path::new(&directory).join(format!("{}.json", stem)))
    }

    pub fn print(&self) {
        info!("-----");
        for kind in Kind::all() {
            if self.enabled(*kind) {
                info!(
                    "Config: {}: Input: {} Output: {} Domain: {}",
                    kind,
                    self.input(*kind).display(),
                    self.output(*kind).display(),
                    kind.domain(),
                );
            } else {
                info!("Config: {}: Disabled", kind);
            }
        }
        let (width, height) = self.size();
        info!("Config: Chart: {}x{}", width, height);
        info!(
            "Config: Export: {}",
            self.general
                .export()
                .unwrap_or_else(|| "Disabled".to_string())
        );
    }
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .about("Success probability graphs for fault-injection forgery experiments")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
        .arg(
            Arg::with_name("single")
                .long("single")
                .value_name("FILE")
                .help("Single attack results, one reading per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("single-output")
                .long("single-output")
                .value_name("FILE")
                .help("Render the single attack chart PNG to file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("skip-single")
                .long("skip-single")
                .help("Do not graph the single attack results"),
        )
        .arg(
            Arg::with_name("parallel")
                .long("parallel")
                .value_name("FILE")
                .help("Parallel attack results, one <q>,<reading> pair per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("parallel-output")
                .long("parallel-output")
                .value_name("FILE")
                .help("Render the parallel attack chart PNG to file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("skip-parallel")
                .long("skip-parallel")
                .help("Do not graph the parallel attack results"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("Pixels")
                .help("Chart width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("Pixels")
                .help("Chart height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("export")
                .long("export")
                .value_name("DIR")
                .help("Also write the sampled curves as JSON into this directory")
                .takes_value(true),
        )
}

/// a helper function to parse a numeric argument by name from `ArgMatches`
fn parse_numeric_arg(matches: &ArgMatches, key: &'static str) -> Result<Option<u32>, ConfigError> {
    match matches.value_of(key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                key,
                value: value.to_string(),
            }),
        None => Ok(None),
    }
}
