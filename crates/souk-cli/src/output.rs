use serde::Serialize;

/// Longest a table cell gets before it is cut with an ellipsis.
const MAX_CELL: usize = 60;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Clips text to `MAX_CELL` characters, appending an ellipsis when cut.
pub fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_CELL {
        return text.to_string();
    }
    let head: String = text.chars().take(MAX_CELL - 1).collect();
    format!("{head}…")
}

/// Plain two-space table. Widths count characters, not bytes, so tags and
/// icons line up.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let render = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                let pad = w.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", render(&headers));
    let seps: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", render(&seps));
    for row in rows {
        println!("{}", render(row));
    }
}
