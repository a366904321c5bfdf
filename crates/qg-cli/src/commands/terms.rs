use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qg_calendar::{SolarTerm, TermEvent};

use super::convert::fmt_time;

pub fn run(year: i32, json: bool) -> Result<(), String> {
    let mut events = SolarTerm::ALL
        .into_iter()
        .map(|term| {
            term.moment(year)
                .map(|at| TermEvent { term, at })
                .map_err(|e| e.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by_key(|e| e.at);

    if json {
        return super::print_json(&events);
    }

    println!("  {} {year}", "Solar terms".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Term", "Kind", "Longitude", "Moment (UTC+8)", "Month"]);
    for event in &events {
        let term = event.term;
        let kind = if term.is_jie() { "节" } else { "气" };
        let month = term
            .month_branch()
            .map(|b| format!("{b}月"))
            .unwrap_or_default();
        table.add_row(vec![
            term.name().to_string(),
            kind.to_string(),
            format!("{:.0}°", term.longitude()),
            fmt_time(event.at),
            month,
        ]);
    }
    println!("{table}");

    Ok(())
}
