use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::{debug, info};

use qg_session::{DivinationSession, SessionConfig};

use super::CalendarArgs;

pub fn run(seed: Option<u64>, calendar: &CalendarArgs) -> Result<(), String> {
    let mut config = SessionConfig {
        calendar: calendar.config()?,
        ..SessionConfig::default()
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = DivinationSession::new(config);
    info!(session = %session.id(), ?seed, "interactive session started");

    println!("  {} divination session {}", "Starting".bold(), session.id());
    println!(
        "  Epoch: {}-{} | Zi: {}",
        config.calendar.epoch.start(),
        config.calendar.epoch.end(),
        config.calendar.sect
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                debug!(input, error = %e, "command rejected");
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
