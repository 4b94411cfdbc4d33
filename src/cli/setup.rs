//! Runtime setup: logging and the rayon pool.

use log::LevelFilter;

/// Map `-v` occurrences to a log level; `RUST_LOG` still takes precedence
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(verbosity_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
    if let Err(e) = result {
        eprintln!("Note: logger already initialized: {}", e);
    }
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        log::debug!("Thread pool already configured: {}", e);
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}
