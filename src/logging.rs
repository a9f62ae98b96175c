use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::LogConfig;
use crate::error::Error;

/// Install the logger. Output goes to the configured file only, since the
/// terminal belongs to the game while it runs. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &LogConfig) -> Result<bool, Error> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(true)
}
