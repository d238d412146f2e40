use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::init::InitLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the workbook with its schema and the two worksheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let mut cfg = Config::load()?;
    cfg.database = db_path.clone();

    println!("⚙️  Initializing naturejournal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook   : {}", &db_path);

    let pool = DbPool::open_initialized(&db_path)?;
    let created = InitLogic::bootstrap(&pool, &cfg)?;

    for sheet in &created {
        success(format!("Created worksheet '{sheet}'"));
    }

    ttlog_soft(
        &pool.conn,
        "init",
        "Workbook initialized",
        &format!("Workbook initialized at {}", &db_path),
    );

    println!("🎉 naturejournal initialization completed!");
    Ok(())
}
