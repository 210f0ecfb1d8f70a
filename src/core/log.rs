use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Widest the operation column may grow before entries get truncated.
const OP_COL_MAX: usize = 60;

struct LogLine {
    id: i32,
    stamp: String,
    operation: String,
    /// `operation (target)`, or just the operation when no target was logged.
    headline: String,
    message: String,
}

impl LogLine {
    fn truncated_headline(&self) -> String {
        if self.headline.len() <= OP_COL_MAX {
            return self.headline.clone();
        }
        let mut cut: String = self.headline.chars().take(OP_COL_MAX - 3).collect();
        cut.push_str("...");
        cut
    }
}

/// ANSI colour for an operation name.
fn operation_colour(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "settings" => Colour::Yellow,
        "holiday" => Colour::Blue,
        "request" => Colour::Cyan,
        "approve" => Colour::Purple,
        "reject" => Colour::Red,
        "cancel" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

fn visible_len(s: &str) -> usize {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").len()
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal audit trail, oldest first, one line per entry.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let mapped = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            // Stored as RFC 3339; reformatted only when it parses.
            let stamp = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let headline = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(LogLine {
                id,
                stamp,
                operation,
                headline,
                message,
            })
        })?;

        let lines: Vec<LogLine> = mapped.collect::<Result<_, _>>()?;

        println!("📜 Internal log:\n");

        if lines.is_empty() {
            println!("   (empty)");
            return Ok(());
        }

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let stamp_w = lines.iter().map(|l| l.stamp.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|l| l.headline.len())
            .max()
            .unwrap_or(10)
            .min(OP_COL_MAX);

        for line in &lines {
            let headline = line.truncated_headline();

            // Only the operation word is coloured; the target stays plain.
            let colour = operation_colour(&line.operation);
            let painted = match headline.split_once(' ') {
                Some((word, rest)) => format!("{} {}", colour.paint(word), rest),
                None => colour.paint(headline.as_str()).to_string(),
            };

            // Padding is computed on the visible text, without ANSI codes.
            let pad = " ".repeat(op_w.saturating_sub(visible_len(&painted)));

            println!(
                "{id:>id_w$}: {stamp:<stamp_w$} | {painted}{pad} => {message}",
                id = line.id,
                stamp = line.stamp,
                message = line.message,
            );
        }

        Ok(())
    }
}
