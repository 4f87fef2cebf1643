use std::fs::{self, File};
use std::path::Path;

use env_logger::{Builder, Env};

use crate::error::{BoardError, BoardResult};

/// Route `log` output into `path` so it never draws over the TUI.
///
/// `level` replaces `RUST_LOG` entirely; without either, only warnings and errors are kept.
pub fn init_file_logger(path: &Path, level: Option<&str>) -> BoardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    filter_builder(level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| BoardError::Logging(e.to_string()))
}

fn filter_builder(level: Option<&str>) -> Builder {
    match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.parse_filters(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    }
}
