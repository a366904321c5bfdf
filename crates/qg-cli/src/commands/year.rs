use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qg_calendar::LunarYear;
use qg_calendar::lunar::month_name;

pub fn run(year: i32, json: bool) -> Result<(), String> {
    let lunar = LunarYear::compute(year).map_err(|e| e.to_string())?;

    if json {
        return super::print_json(&lunar);
    }

    println!(
        "  {} {}年 ({})",
        year.to_string().bold(),
        lunar.pillar(),
        lunar.zodiac()
    );
    match lunar.leap_month() {
        Some(m) => println!("  Leap month: {}", format!("{}月", month_name(m, true)).yellow()),
        None => println!("  {}", "No leap month".dimmed()),
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Month", "First day", "Days"]);
    for month in &lunar.months {
        table.add_row(vec![
            format!("{}月", month_name(month.number, month.leap)),
            month.start.format("%Y-%m-%d").to_string(),
            month.days.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
