//! naturejournal main entrypoint.

use naturejournal::run;
use naturejournal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
