use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command line switches; `quiet` wins
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = level_for(debug, quiet);

    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Error);
    }
}
