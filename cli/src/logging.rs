use tracing_subscriber::filter::LevelFilter;

/// Sends the game's log records to stderr, `OFF` keeps everything quiet.
pub fn init(level: LevelFilter) {
    if let Err(err) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Error initializing logger: {err}");
    }
}
