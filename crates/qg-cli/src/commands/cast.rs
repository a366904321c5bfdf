use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use qg_casting::{
    CastConfig, Caster, Hexagram, LinePosition, ProtocolKind, RandomnessService, Reading,
};
use qg_core::{Polarity, Stem};

pub struct CastArgs<'a> {
    pub protocol: &'a str,
    pub seed: Option<u64>,
    pub codes: &'a [String],
    pub lines: Option<&'a str>,
    pub day_stem: Option<&'a str>,
    pub json: bool,
}

#[derive(Serialize)]
struct Report {
    protocol: ProtocolKind,
    hexagram: Hexagram,
    reading: Reading,
}

pub fn run(args: &CastArgs<'_>) -> Result<(), String> {
    let kind: ProtocolKind = args.protocol.parse().map_err(|e| format!("{e}"))?;
    let day_stem = args
        .day_stem
        .map(|s| s.parse::<Stem>().map_err(|e| e.to_string()))
        .transpose()?;

    let mut config = CastConfig::default().with_protocol(kind);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut caster = config.caster();
    let mut rng = config.rng();

    match kind {
        ProtocolKind::Sequential => cast_sequential(&mut caster, &mut rng, args.json)?,
        ProtocolKind::OneShot => {
            caster.cast_all(&mut rng).map_err(|e| e.to_string())?;
        }
        ProtocolKind::Numeric => enter_codes(&mut caster, args.codes)?,
        ProtocolKind::Direct => {
            let lines = args
                .lines
                .ok_or("direct casting needs --lines, e.g. --lines 787878")?;
            choose_lines(&mut caster, lines)?;
        }
    }

    let hexagram = caster.hexagram().map_err(|e| e.to_string())?;
    let reading = hexagram.reading(day_stem);

    if args.json {
        return super::print_json(&Report {
            protocol: kind,
            hexagram,
            reading,
        });
    }

    print_hexagram(&hexagram, &reading);
    Ok(())
}

fn cast_sequential<R: RandomnessService>(
    caster: &mut Caster,
    rng: &mut R,
    json: bool,
) -> Result<(), String> {
    for _ in LinePosition::ALL {
        let (position, line) = caster.cast_next(rng).map_err(|e| e.to_string())?;
        if !json {
            println!(
                "  {} {} {}",
                position.to_string().dimmed(),
                line.value,
                line.value
                    .faces()
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<String>()
                    .dimmed()
            );
        }
    }
    if !json {
        println!();
    }
    Ok(())
}

fn enter_codes(caster: &mut Caster, codes: &[String]) -> Result<(), String> {
    if codes.len() != 6 {
        return Err(format!(
            "numeric casting needs six codes, got {} (e.g. --codes 135,246,100,110,100,110)",
            codes.len()
        ));
    }
    for (position, code) in LinePosition::ALL.into_iter().zip(codes) {
        caster
            .set_code(position, code)
            .map_err(|e| format!("{position}: {e}"))?;
    }
    Ok(())
}

fn choose_lines(caster: &mut Caster, lines: &str) -> Result<(), String> {
    let digits: Vec<char> = lines.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 6 {
        return Err(format!("--lines needs six of 6/7/8/9, got '{lines}'"));
    }
    for (position, digit) in LinePosition::ALL.into_iter().zip(digits) {
        let (polarity, presses) = match digit {
            '7' => (Polarity::Yang, 1),
            '9' => (Polarity::Yang, 2),
            '8' => (Polarity::Yin, 1),
            '6' => (Polarity::Yin, 2),
            other => return Err(format!("{position}: '{other}' is not one of 6/7/8/9")),
        };
        for _ in 0..presses {
            caster
                .toggle(position, polarity)
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn print_hexagram(hexagram: &Hexagram, reading: &Reading) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Line", "Draw", "", "Kind"];
    if reading.spirits.is_some() {
        header.push("Spirit");
    }
    table.set_header(header);

    for position in LinePosition::ALL.into_iter().rev() {
        let line = hexagram.line(position);
        let symbol = match line.kind.marker() {
            Some(m) => format!("{} {m}", line.kind.symbol()),
            None => line.kind.symbol().to_string(),
        };
        let mut row = vec![
            position.to_string(),
            line.value.to_string(),
            symbol,
            line.kind.to_string(),
        ];
        if let Some(spirits) = &reading.spirits {
            row.push(spirits[position.index()].to_string());
        }
        table.add_row(row);
    }
    println!("{table}");
    println!();

    println!(
        "  {} {} {}",
        "本卦".bold(),
        reading.primary.full_name.green(),
        format!("(第{}卦)", reading.primary.number).dimmed()
    );
    match &reading.changed {
        Some(changed) => println!(
            "  {} {} {}",
            "变卦".bold(),
            changed.full_name.cyan(),
            format!("(第{}卦)", changed.number).dimmed()
        ),
        None => println!("  {} {}", "变卦".bold(), "无动爻".dimmed()),
    }
}
