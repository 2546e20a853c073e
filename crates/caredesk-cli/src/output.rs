use caredesk::Applied;
use serde::Serialize;

use crate::error::CliResult;

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Unwrap an applied change, warning on stderr if it could not be saved.
///
/// The change stays in effect for the rest of the command either way.
pub fn settle<T>(applied: Applied<T>) -> T {
    if let Err(e) = &applied.saved {
        eprintln!("Warning: change applied but not saved: {e}");
    }
    applied.value
}
