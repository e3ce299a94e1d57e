use std::fmt::Write;

use coinboard_core::{parse_numeric, AppViewModel, Asset, LoadPhase, SortDirection};

use super::constants::*;

/// Renders both tables, the status line and any pending notice.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({}/{})",
        FAVORITES_TITLE,
        view.favorites.len(),
        view.favorites_capacity
    );
    if view.favorites.is_empty() {
        let _ = writeln!(
            out,
            "  (no favorites yet, add up to {})",
            view.favorites_capacity
        );
    } else {
        let headers = LISTING_COLUMNS
            .iter()
            .map(|(_, title)| title.to_string())
            .chain(std::iter::once(ACTION_HEADER.to_string()))
            .collect::<Vec<_>>();
        let rows = view
            .favorites
            .iter()
            .map(|row| {
                asset_cells(row.position, &row.asset, format!("remove {}", row.asset.id))
            })
            .collect::<Vec<_>>();
        write_table(&mut out, &headers, &rows);
    }
    out.push('\n');

    let _ = writeln!(out, "{LISTING_TITLE}");
    let headers = LISTING_COLUMNS
        .iter()
        .map(|(key, title)| {
            if *key == view.sort.key {
                format!("{title} {}", direction_marker(view.sort.direction))
            } else {
                title.to_string()
            }
        })
        .chain(std::iter::once(ACTION_HEADER.to_string()))
        .collect::<Vec<_>>();
    if view.rows.is_empty() {
        let _ = writeln!(out, "  {}", empty_listing_text(view.phase));
    } else {
        let rows = view
            .rows
            .iter()
            .map(|row| {
                let action = if row.is_favorite {
                    "Added".to_string()
                } else {
                    format!("add {}", row.asset.id)
                };
                asset_cells(row.position, &row.asset, action)
            })
            .collect::<Vec<_>>();
        write_table(&mut out, &headers, &rows);
    }

    if view.has_more {
        let remaining = view.total_assets.saturating_sub(view.rows.len());
        let _ = writeln!(out, "See More: type `more` ({remaining} more)");
    }
    let _ = writeln!(out, "{}", status_line(view));
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {notice}");
    }

    out
}

fn asset_cells(position: usize, asset: &Asset, action: String) -> Vec<String> {
    vec![
        position.to_string(),
        asset.name.clone(),
        asset.symbol.clone(),
        format_usd(&asset.price_usd),
        format_usd(&asset.market_cap_usd),
        format_percent(&asset.change_percent_24hr),
        action,
    ]
}

fn write_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, headers, &widths);
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");
    let _ = writeln!(out, "  {rule}");
    for row in rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "  {}", line.trim_end());
}

fn direction_marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    }
}

fn empty_listing_text(phase: LoadPhase) -> &'static str {
    match phase {
        LoadPhase::Idle | LoadPhase::Loading => "(loading listing...)",
        LoadPhase::Error => "(listing unavailable)",
        LoadPhase::Ready => "(no assets)",
    }
}

fn status_line(view: &AppViewModel) -> String {
    match view.phase {
        LoadPhase::Idle => "Status: starting".to_string(),
        LoadPhase::Loading => "Status: loading".to_string(),
        LoadPhase::Error => format!(
            "Status: listing unavailable ({})",
            view.fetch_error.as_deref().unwrap_or("unknown error")
        ),
        LoadPhase::Ready => {
            let mut line = format!(
                "Status: showing {} of {} | sorted by {} {}",
                view.rows.len(),
                view.total_assets,
                view.sort.key,
                direction_label(view.sort.direction)
            );
            if let Some(at) = &view.fetched_at {
                let _ = write!(line, " | updated {at}");
            }
            line
        }
    }
}

/// `$` followed by the value with two decimals and thousands separators.
fn format_usd(raw: &str) -> String {
    match parse_numeric(raw) {
        Some(value) => {
            let fixed = format!("{:.2}", value.abs());
            let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}${}.{cents}", format_with_commas(whole))
        }
        None => "-".to_string(),
    }
}

fn format_percent(raw: &str) -> String {
    match parse_numeric(raw) {
        Some(value) => format!("{value:.2}%"),
        None => "-".to_string(),
    }
}

fn format_with_commas(digits: &str) -> String {
    let mut out = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
