//! `fern` logger setup.
use std::time::Instant;

/// Installs a stdout logger at `level`. Lines look like
/// `[  1.234s INFO  verdant_renderer] message`, timed from this call.
///
/// wgpu and naga are capped at `Warn` since they are very chatty at `Info`.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let start = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:>8.3}s {:<5} {}] {}",
                start.elapsed().as_secs_f32(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("wgpu_core", log::LevelFilter::Warn)
        .level_for("wgpu_hal", log::LevelFilter::Warn)
        .level_for("naga", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    log::debug!("logging initialized at {level}");
    Ok(())
}
