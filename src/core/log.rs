use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi pattern is valid"));

fn strip_ansi(s: &str) -> String {
    ANSI_CODES.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "register" => Colour::Cyan,
        "login" | "logout" => Colour::Yellow,
        "import" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogLine>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogLine {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_target = |l: &LogLine| {
            if l.target.is_empty() {
                l.operation.clone()
            } else {
                format!("{} ({})", l.operation, l.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|l| op_target(l).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|l| l.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for line in &entries {
            let color = color_for_operation(&line.operation);
            let visible = op_target(line);

            let truncated = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is colored
            let colored = match truncated.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                line.date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
