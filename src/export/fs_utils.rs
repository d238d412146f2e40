//! Guard against clobbering an earlier export.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ok when `path` is free, `force` is set, or the user agrees to replace it.
pub(crate) fn confirm_overwrite(path: &Path, entries: usize, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!(
        "Replace it with {entries} journal entr{}? [y/N]: ",
        if entries == 1 { "y" } else { "ies" }
    );
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Previous export will be replaced.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "journal not exported, '{}' left untouched",
            path.display()
        ))),
    }
}
