use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::SessionFile;
use crate::core::form::LocationOverrides;
use crate::core::journal::{AddLogic, EntryRequest, PlaceChoice};
use crate::core::zip::ZippopotamResolver;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Timing, format_timestamp};
use crate::ui::messages::success;
use crate::utils::date::{self, now_in};

/// Add a journal entry for the logged-in user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        duration,
        place,
        new_place,
        zip,
        city,
        state,
        country,
        activities,
        notes,
    } = cmd
    {
        //
        // 1. Who is writing
        //
        let identity = SessionFile::default_location().require()?;

        //
        // 2. When (defaults: now in the reference zone)
        //
        let now = now_in(cfg.tz()?);
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => now.date_naive(),
        };
        let t = match time {
            Some(s) => date::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
            None => now.time(),
        };
        let timing = Timing::new(d, t, *duration)?;

        //
        // 3. Where
        //
        let place_choice = match (place, new_place) {
            (Some(name), None) => PlaceChoice::Existing(name.clone()),
            (None, Some(name)) => PlaceChoice::New(name.clone()),
            _ => {
                return Err(AppError::Validation(
                    "Use exactly one of --place or --new-place.".into(),
                ));
            }
        };

        let req = EntryRequest {
            timing,
            place: place_choice,
            overrides: LocationOverrides {
                zip: zip.clone(),
                city: city.clone(),
                state: state.clone(),
                country: country.clone(),
            },
            activities: activities.clone(),
            notes: notes.clone(),
        };

        //
        // 4. Build and append
        //
        let pool = DbPool::open_initialized(&cfg.database)?;
        let resolver = ZippopotamResolver::from_config(cfg)?;

        let entry = AddLogic::submit(&pool, cfg, &identity, &req, &resolver)?;

        ttlog_soft(
            &pool.conn,
            "add",
            &entry.place_name,
            &format!(
                "{} {} min by {}",
                format_timestamp(&entry.timestamp),
                entry.duration_minutes,
                identity.email
            ),
        );

        success("Journal entry saved!");
        println!(
            "   {} → {} | {}",
            format_timestamp(&entry.timestamp),
            format_timestamp(&entry.end_timestamp),
            entry.composite_place
        );
    }

    Ok(())
}
