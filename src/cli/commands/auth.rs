//! `login`, `register`, `logout` and `whoami`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{AuthLogic, SessionFile};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::now_in;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let session = SessionFile::default_location();

    match cmd {
        Commands::Login { email } => {
            let pool = DbPool::open_initialized(&cfg.database)?;

            let identity = match AuthLogic::login(&pool, cfg, email) {
                Ok(identity) => identity,
                Err(e @ AppError::LookupNotFound(_)) => {
                    warning("Email not found. Please register.");
                    return Err(e);
                }
                Err(e) => return Err(e),
            };

            session.save(&identity)?;
            ttlog_soft(&pool.conn, "login", &identity.email, "session started");
            success(format!("Welcome back, {}!", identity.display_name));
            print_identity(&identity);
        }
        Commands::Register { email, name, lang } => {
            let pool = DbPool::open_initialized(&cfg.database)?;
            let now = now_in(cfg.tz()?);

            let identity = AuthLogic::register(&pool, cfg, email, name, lang, &now)?;

            session.save(&identity)?;
            ttlog_soft(&pool.conn, "register", &identity.email, &cfg.source_tag);
            success("Registration successful! Logging you in...");
            success(format!("Welcome {}!", identity.display_name));
        }
        Commands::Logout => {
            if session.clear()? {
                success("You have been logged out.");
            } else {
                info("Nobody is logged in.");
            }
        }
        Commands::Whoami => match session.load()? {
            Some(identity) => print_identity(&identity),
            None => info("Please login (njournal login <email>)."),
        },
        _ => {}
    }

    Ok(())
}

fn print_identity(identity: &crate::models::identity::Identity) {
    println!(
        "You are Logged in as: {} | Role: {}",
        identity.display_name, identity.role
    );
}
