use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

/// Route `log` output to `path`.
///
/// The terminal is in raw mode while the UI runs, so logs never go to
/// stderr. Without a log file the logger stays uninstalled and the `log`
/// macros are no-ops.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    log::info!("logging to {}", path.display());
    Ok(())
}
