use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::AddLogic;
use crate::core::place::resolve_place;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::place::PlaceSelection;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Places) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let history = AddLogic::load_history(&pool, cfg);
        let places = history.distinct_places();

        if places.is_empty() {
            println!("No places yet. Add one with `njournal add --new-place <NAME> ...`.");
            return Ok(());
        }

        let mut table = Table::new(&["Place", "City", "State", "Zip", "Country"]);
        for name in places {
            let selection = PlaceSelection::Existing(name);
            let loc = resolve_place(&selection, &history);
            table.add_row(vec![
                selection.label().to_string(),
                loc.city,
                loc.state,
                loc.zip,
                loc.country,
            ]);
        }

        print!("{}", table.render());
        println!(
            "\nReuse one with --place <NAME>, or pick {} with --new-place <NAME>.",
            PlaceSelection::NewPlace.label()
        );
    }
    Ok(())
}
