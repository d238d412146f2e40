use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { sheet, file } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let path = expand_tilde(file);

        let count = ImportLogic::import_csv(&pool, sheet, &path)?;

        ttlog_soft(
            &pool.conn,
            "import",
            sheet,
            &format!("{count} rows from {}", path.display()),
        );
        success(format!("Imported {count} rows into '{sheet}'."));
    }
    Ok(())
}
