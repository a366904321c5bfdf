//! Line-oriented commands over a session.
//!
//! `DivinationSession::process` takes one line of user input and returns the
//! text to show, so a REPL only has to read lines and print replies.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use qg_calendar::{CalendarLibrary, Clock, LunarDate, Moment};
use qg_casting::{CastStatus, LinePosition, ProtocolKind};
use qg_core::{Branch, Completion, Field, InputEvent, Pillar, PillarKind, Polarity, Slot, Stem};

use crate::error::{SessionError, SessionResult};
use crate::session::DivinationSession;

const HELP: &str = "\
Pillars:
  year <甲|子|甲子>       set the year stem and/or branch
  month <寅>              set the month branch (stem is derived)
  day <甲|子|甲子>        set the day stem and/or branch
  hour <子>               set the hour branch (stem is derived)
  clear [year|month|day|hour]
                          clear one pillar, or everything
  pillars                 show the chart
  candidates              list resolved Gregorian candidates
  select <rank>           choose a candidate
Moment:
  date <YYYY-MM-DD> [HH:MM[:SS]]
  lunar <year> <[闰]month> <day> [hour]
  now
Casting:
  protocol <sequential|one-shot|numeric|direct>
  cast                    draw the next line (or all six in one-shot)
  digits <0-9...>         numeric entry at the active line
  erase <1-6>             clear the active numeric line
  yang <1-6> | yin <1-6>  direct choice; repeat to make it moving
  lines                   show the lines cast so far
  reading                 identify the hexagram
Session:
  export                  print the finished divination as JSON
  reset                   start over
  quit";

impl<L: CalendarLibrary, C: Clock> DivinationSession<L, C> {
    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "year" => self.do_set(PillarKind::Year, rest),
            "month" => self.do_set(PillarKind::Month, rest),
            "day" => self.do_set(PillarKind::Day, rest),
            "hour" => self.do_set(PillarKind::Hour, rest),
            "clear" => self.do_clear(rest),
            "pillars" => Ok(self.chart()),
            "candidates" => self.do_candidates(),
            "select" => self.do_select(rest),
            "date" => self.do_date(rest),
            "lunar" => self.do_lunar(rest),
            "now" => {
                let solar = self.describe_now()?.solar;
                Ok(format!("Moment: {solar}\n{}", self.chart()))
            }
            "protocol" => {
                let kind: ProtocolKind = rest.parse()?;
                self.switch_protocol(kind);
                Ok(format!("Protocol: {kind}"))
            }
            "cast" => self.do_cast(),
            "digits" => self.do_digits(rest),
            "erase" => {
                let position = parse_position(rest)?;
                self.caster_mut().clear(position)?;
                Ok(format!("{position} cleared"))
            }
            "yang" => self.do_toggle(rest, Polarity::Yang),
            "yin" => self.do_toggle(rest, Polarity::Yin),
            "lines" => Ok(self.lines()),
            "reading" => self.do_reading(),
            "export" => Ok(self.export()?.to_json()?),
            "reset" => {
                self.reset();
                Ok("Session reset.".to_string())
            }
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("再会".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn do_set(&mut self, kind: PillarKind, rest: &str) -> SessionResult<String> {
        let mut events = Vec::new();
        let chars: Vec<char> = rest.chars().collect();
        match chars.as_slice() {
            [c] => {
                if let Some(stem) = Stem::from_glyph(*c) {
                    events.push(stem_event(kind, stem)?);
                } else if let Some(branch) = Branch::from_glyph(*c) {
                    events.push(InputEvent::SetBranch(kind, branch));
                } else {
                    return Err(qg_core::QgError::UnknownSymbol(rest.to_string()).into());
                }
            }
            [_, _] => {
                // A whole pillar replaces whatever the slot held.
                let pillar: Pillar = rest.parse()?;
                let stem = stem_event(kind, pillar.stem())?;
                events.push(InputEvent::Clear(Field::stem_of(kind)));
                events.push(InputEvent::Clear(Field::branch_of(kind)));
                events.push(stem);
                events.push(InputEvent::SetBranch(kind, pillar.branch()));
            }
            _ => {
                return Err(SessionError::InvalidInput(format!(
                    "usage: {} <stem|branch|pillar>",
                    kind_word(kind)
                )));
            }
        }

        let fits = events
            .iter()
            .try_fold(*self.input(), |input, &event| {
                let (next, outcome) = input.apply(event);
                outcome.accepted.then_some(next)
            })
            .is_some();
        if !fits {
            return Err(SessionError::InvalidInput(format!(
                "{rest} does not fit the {} pillar (stem and branch polarity must match)",
                kind_word(kind)
            )));
        }

        let before = *self.input();
        for event in events {
            self.apply(event)?;
        }

        let mut out = self.chart();
        if self.input().is_complete() && *self.input() != before {
            out.push('\n');
            out.push_str(&self.candidate_summary());
        }
        Ok(out)
    }

    fn do_clear(&mut self, rest: &str) -> SessionResult<String> {
        let kind = match rest {
            "" | "all" => {
                self.apply(InputEvent::ClearAll)?;
                return Ok(self.chart());
            }
            "year" => PillarKind::Year,
            "month" => PillarKind::Month,
            "day" => PillarKind::Day,
            "hour" => PillarKind::Hour,
            other => {
                return Err(SessionError::InvalidInput(format!(
                    "unknown pillar: {other}"
                )));
            }
        };
        self.apply(InputEvent::Clear(Field::stem_of(kind)))?;
        self.apply(InputEvent::Clear(Field::branch_of(kind)))?;
        Ok(self.chart())
    }

    fn do_candidates(&self) -> SessionResult<String> {
        let resolution = self.resolution().ok_or(SessionError::NoResolution)?;
        if resolution.is_empty() {
            return Ok("No Gregorian instant carries these pillars.".to_string());
        }
        let mut out = String::new();
        for candidate in resolution.most_recent_first() {
            let _ = writeln!(
                out,
                "  [{:>2}/{}] {}",
                candidate.rank,
                candidate.total,
                candidate.solar.format("%Y-%m-%d %H:%M:%S")
            );
        }
        Ok(out.trim_end().to_string())
    }

    fn do_select(&mut self, rest: &str) -> SessionResult<String> {
        let rank: usize = rest
            .parse()
            .map_err(|_| SessionError::InvalidInput("usage: select <rank>".to_string()))?;
        let instant = *self.select(rank)?;
        let mut out = format!("Moment: {}", instant.solar.format("%Y-%m-%d %H:%M:%S"));
        if let Some(lunar) = &instant.lunar {
            let _ = write!(out, "\nLunar:  {lunar}");
        }
        Ok(out)
    }

    fn do_date(&mut self, rest: &str) -> SessionResult<String> {
        let mut words = rest.split_whitespace();
        let date = words
            .next()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .ok_or_else(|| {
                SessionError::InvalidInput("usage: date <YYYY-MM-DD> [HH:MM[:SS]]".to_string())
            })?;
        let time = match words.next() {
            Some(t) => parse_time(t)?,
            None => NaiveTime::MIN,
        };
        let moment = Moment::Gregorian {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        };
        self.describe_moment(moment)
    }

    fn do_lunar(&mut self, rest: &str) -> SessionResult<String> {
        let usage =
            || SessionError::InvalidInput("usage: lunar <year> <[闰]month> <day> [hour]".into());
        let words: Vec<&str> = rest.split_whitespace().collect();
        let [year, month, day, tail @ ..] = words.as_slice() else {
            return Err(usage());
        };
        let (leap, month) = match month.strip_prefix('闰') {
            Some(m) => (true, m),
            None => (false, *month),
        };
        let year: i32 = year.parse().map_err(|_| usage())?;
        let month: u8 = month.parse().map_err(|_| usage())?;
        let day: u8 = day.parse().map_err(|_| usage())?;
        let hour: u32 = match tail.first() {
            Some(h) => h.parse().map_err(|_| usage())?,
            None => 0,
        };
        let moment = Moment::Lunar {
            date: LunarDate::new(year, month, leap, day),
            hour,
            minute: 0,
            second: 0,
        };
        self.describe_moment(moment)
    }

    fn describe_moment(&mut self, moment: Moment) -> SessionResult<String> {
        let instant = *self.describe(moment)?;
        let mut out = format!("Moment: {}", instant.solar.format("%Y-%m-%d %H:%M:%S"));
        if let Some(lunar) = &instant.lunar {
            let _ = write!(out, "\nLunar:  {lunar}");
        }
        let _ = write!(out, "\n{}", self.chart());
        Ok(out)
    }

    fn do_cast(&mut self) -> SessionResult<String> {
        match self.caster().kind() {
            ProtocolKind::Sequential => {
                let (position, line) = self.cast_next()?;
                Ok(format!(
                    "{position}: {} {} {}",
                    line.value,
                    line.kind.symbol(),
                    line.kind
                ))
            }
            ProtocolKind::OneShot => {
                self.cast_all()?;
                Ok(self.lines())
            }
            other => Err(SessionError::InvalidInput(format!(
                "{other} casting takes typed input, not draws"
            ))),
        }
    }

    fn do_digits(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidInput("usage: digits <0-9...>".to_string()));
        }
        for ch in rest.chars().filter(|c| !c.is_whitespace()) {
            self.caster_mut().push_digit(ch)?;
        }
        Ok(self.lines())
    }

    fn do_toggle(&mut self, rest: &str, polarity: Polarity) -> SessionResult<String> {
        let position = parse_position(rest)?;
        let choice = self.caster_mut().toggle(position, polarity)?;
        Ok(format!("{position}: {}", choice.draw()))
    }

    fn do_reading(&self) -> SessionResult<String> {
        let reading = self.reading()?;
        let mut out = format!("本卦: {}", reading.primary.full_name);
        let _ = write!(out, " (第{}卦)", reading.primary.number);
        match &reading.changed {
            Some(changed) => {
                let _ = write!(out, "\n变卦: {} (第{}卦)", changed.full_name, changed.number);
            }
            None => out.push_str("\n变卦: (无动爻)"),
        }
        if !reading.moving.is_empty() {
            let moving: Vec<String> = reading.moving.iter().map(|p| p.to_string()).collect();
            let _ = write!(out, "\n动爻: {}", moving.join(" "));
        }
        if let Some(spirits) = reading.spirits {
            let names: Vec<&str> = spirits.iter().map(|s| s.name()).collect();
            let _ = write!(out, "\n六神: {}", names.join(" "));
        }
        Ok(out)
    }

    fn chart(&self) -> String {
        let input = self.input();
        let cells: Vec<String> = PillarKind::ALL
            .into_iter()
            .map(|kind| {
                let stem = input.stem(kind).map_or('？', Stem::glyph);
                let branch = input.branch(kind).map_or('？', Branch::glyph);
                format!("{stem}{branch}{kind}")
            })
            .collect();
        let mut out = cells.join(" ");
        if let Completion::Incomplete(missing) = input.completion() {
            let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            let _ = write!(out, "\n  missing: {}", names.join(" "));
        }
        out
    }

    fn candidate_summary(&self) -> String {
        match self.resolution() {
            Some(r) if r.is_empty() => "No Gregorian instant carries these pillars.".to_string(),
            Some(r) => format!("{} candidate(s); use 'candidates' and 'select <rank>'.", r.len()),
            None => String::new(),
        }
    }

    fn lines(&self) -> String {
        let mut rows = Vec::new();
        for position in LinePosition::ALL.into_iter().rev() {
            let row = match self.caster().line(position) {
                Some(line) => format!(
                    "  {position} {} {} {}{}",
                    line.value,
                    line.kind.symbol(),
                    line.kind,
                    line.kind.marker().map(|m| format!(" {m}")).unwrap_or_default()
                ),
                None => format!("  {position} ---"),
            };
            rows.push(row);
        }
        let status = match self.caster().status() {
            CastStatus::Complete => "complete".to_string(),
            CastStatus::Incomplete { filled } => format!("{filled}/6"),
        };
        format!("[{} {status}]\n{}", self.caster().kind(), rows.join("\n"))
    }
}

fn stem_event(kind: PillarKind, stem: Stem) -> SessionResult<InputEvent> {
    let slot = match kind {
        PillarKind::Year => Slot::Year,
        PillarKind::Day => Slot::Day,
        PillarKind::Month | PillarKind::Hour => {
            return Err(SessionError::InvalidInput(format!(
                "the {} stem is derived; enter the branch",
                kind_word(kind)
            )));
        }
    };
    Ok(InputEvent::SetStem(slot, stem))
}

fn kind_word(kind: PillarKind) -> &'static str {
    match kind {
        PillarKind::Year => "year",
        PillarKind::Month => "month",
        PillarKind::Day => "day",
        PillarKind::Hour => "hour",
    }
}

fn parse_position(s: &str) -> SessionResult<LinePosition> {
    s.parse::<usize>()
        .ok()
        .and_then(LinePosition::from_ordinal)
        .ok_or_else(|| SessionError::InvalidInput(format!("line must be 1-6, got '{s}'")))
}

fn parse_time(s: &str) -> SessionResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| SessionError::InvalidInput(format!("invalid time: {s}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use qg_calendar::{FixedClock, StandardCalendar};
    use qg_casting::{Draw, ScriptedDraws};

    use super::*;
    use crate::config::SessionConfig;

    fn session(codes: &[&str]) -> DivinationSession<StandardCalendar, FixedClock> {
        let draws = ScriptedDraws::new(codes.iter().map(|c| c.parse::<Draw>().unwrap()));
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );
        let config = SessionConfig::default().with_epoch(1900, 2000);
        DivinationSession::with_parts(config, StandardCalendar, clock, Box::new(draws))
    }

    #[test]
    fn entering_pillars() {
        let mut s = session(&[]);
        let out = s.process("year 甲").unwrap();
        assert!(out.contains("甲？年"));
        assert!(s.process("year 丑").is_err());
        assert!(s.process("month 丙寅").is_err());
        s.process("year 己丑").unwrap();
        s.process("month 酉").unwrap();
        s.process("day 甲子").unwrap();
        let out = s.process("hour 申").unwrap();
        assert!(out.contains("己丑年 癸酉月 甲子日 壬申时"));
        assert!(out.contains("candidate"));
        assert!(s.process("candidates").unwrap().contains("1949-10-01 16:00:00"));
    }

    #[test]
    fn whole_pillar_replaces_the_slot() {
        let mut s = session(&[]);
        s.process("year 乙丑").unwrap();
        let out = s.process("year 甲子").unwrap();
        assert!(out.contains("甲子年"));

        assert!(s.process("year 甲丑").is_err());
        assert_eq!(s.input().stem(PillarKind::Year), Some(Stem::Jia));
        assert_eq!(s.input().branch(PillarKind::Year), Some(Branch::Zi));

        s.process("month 酉").unwrap();
        s.process("day 甲子").unwrap();
        s.process("hour 申").unwrap();
        let out = s.process("day 乙丑").unwrap();
        assert!(out.contains("乙丑日"));
        assert!(s.resolution().is_some());
    }

    #[test]
    fn clear_pillar() {
        let mut s = session(&[]);
        s.process("day 甲子").unwrap();
        let out = s.process("clear day").unwrap();
        assert!(out.contains("？？日"));
        assert!(s.process("clear week").is_err());
    }

    #[test]
    fn dates_fill_the_chart() {
        let mut s = session(&[]);
        let out = s.process("date 1949-10-01 16:00").unwrap();
        assert!(out.contains("己丑年 癸酉月 甲子日 壬申时"));
        let out = s.process("lunar 2024 1 1 9").unwrap();
        assert!(out.contains("2024-02-10"));
        assert!(s.process("date yesterday").is_err());
    }

    #[test]
    fn casting_commands() {
        let mut s = session(&["135", "246", "100", "110", "100", "110"]);
        assert!(s.process("cast").unwrap().contains("初爻: 135"));
        s.process("protocol numeric").unwrap();
        s.process("digits 135 246").unwrap();
        assert!(s.process("digits 1x").is_err());
        assert!(s.process("erase 1").is_err());
        s.process("erase 3").unwrap();
        s.process("protocol direct").unwrap();
        for n in 1..=6 {
            s.process(&format!("yang {n}")).unwrap();
        }
        assert_eq!(s.process("yang 5").unwrap(), "五爻: 111");
        let reading = s.process("reading").unwrap();
        assert!(reading.contains("乾为天"));
        assert!(reading.contains("火天大有"));
    }

    #[test]
    fn export_command() {
        let mut s = session(&[]);
        assert!(matches!(
            s.process("export"),
            Err(SessionError::Incomplete { .. })
        ));
        s.process("date 1949-10-01 16:00").unwrap();
        s.process("protocol direct").unwrap();
        for n in 1..=6 {
            s.process(&format!("yin {n}")).unwrap();
        }
        let json = s.process("export").unwrap();
        assert!(json.contains("\"pillars\""));
        assert!(json.contains("坤"));
    }

    #[test]
    fn unknown_command() {
        let mut s = session(&[]);
        assert!(matches!(
            s.process("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
        assert!(s.process("").unwrap().is_empty());
        assert!(s.process("help").unwrap().contains("protocol"));
    }
}
