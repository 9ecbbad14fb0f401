//! Logger setup.

/// Installs a stderr logger with timestamped records at `Info` level.
/// Intended to be called once, early in `main`.
pub fn init() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply();
    if let Err(e) = result {
        eprintln!("failed to install logger: {e}");
    }
}
