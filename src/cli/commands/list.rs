use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionFile;
use crate::core::list::{ListLogic, RecordFilter};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        place,
        mine,
    } = cmd
    {
        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };

        let user_email = if *mine {
            Some(SessionFile::default_location().require()?.email)
        } else {
            None
        };

        let filter = RecordFilter {
            bounds,
            place: place.clone(),
            user_email,
        };

        let pool = DbPool::open_initialized(&cfg.database)?;
        let records = ListLogic::load(&pool, cfg, &filter)?;

        if records.is_empty() {
            println!("No journal entries found.");
            return Ok(());
        }

        ListLogic::print(&records);
    }
    Ok(())
}
