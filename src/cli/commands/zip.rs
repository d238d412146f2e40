use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::zip::{ZipOutcome, ZippopotamResolver, resolve_zip};
use crate::errors::{AppError, AppResult};
use crate::models::zip::is_valid_zip;
use crate::ui::messages::warning;
use crate::utils::colors::{GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Zip { code } = cmd {
        let code = code.trim();
        if !is_valid_zip(code) {
            return Err(AppError::Validation(format!(
                "ZIP code must be 5 digits (got '{code}')."
            )));
        }

        let resolver = ZippopotamResolver::from_config(cfg)?;
        match resolve_zip(&resolver, code) {
            ZipOutcome::Resolved(info) => {
                println!("{GREEN}{code}{RESET}");
                println!("Country : {}", info.country);
                println!("State   : {}", info.state);
                println!("Cities  : {}", info.cities.join(", "));
            }
            ZipOutcome::Unresolved(reason) => {
                warning(format!("ZIP {code} could not be resolved: {reason}"));
            }
        }
    }
    Ok(())
}
