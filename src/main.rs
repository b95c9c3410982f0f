// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use successgraph::config::VERSION;
use successgraph::pipeline;
use successgraph::{Config, Kind, Logger};

fn main() {
    let config = Config::new();

    Logger::new()
        .label("successgraph")
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("successgraph {} initializing...", VERSION);

    config.print();

    // one chart at a time, in order
    for kind in Kind::all() {
        let outcome = pipeline::run(*kind, &config);
        debug!("{}: {:?}", kind, outcome);
    }
}
