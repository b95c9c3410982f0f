// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Logs the message at error level and terminates the process.
#[macro_export]
macro_rules! fatal {
    ($fmt:expr) => {{
        log::error!($fmt);
        log::Log::flush(log::logger());
        std::process::exit(1)
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        log::error!($fmt, $($arg)*);
        log::Log::flush(log::logger());
        std::process::exit(1)
    }};
}
