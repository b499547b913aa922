//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod init;
pub mod render;
pub mod tags;

use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

use crate::error::{CliError, CliResult, IntoCli};

/// Read a markup document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_markup(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).with_cli_context(|| "Failed to read markup from stdin");
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: e,
        },
    })
}
