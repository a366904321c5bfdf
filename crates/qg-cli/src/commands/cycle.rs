use comfy_table::{ContentArrangement, Table};

use qg_core::{Pillar, SexagenaryCycle};

pub fn run(json: bool) -> Result<(), String> {
    let cycle: Vec<Pillar> = SexagenaryCycle::new().collect();

    if json {
        return super::print_json(&cycle);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Pillar", "Polarity", "Zodiac"]);
    for (i, pillar) in cycle.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            pillar.to_string(),
            pillar.stem().polarity().to_string(),
            pillar.branch().zodiac().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
