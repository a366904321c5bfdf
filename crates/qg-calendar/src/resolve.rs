//! Reverse resolution: complete pillars to the instants that carry them.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use qg_core::FourPillars;

use crate::clock::Clock;
use crate::config::{CalendarConfig, TimeFill};
use crate::error::{CalendarError, CalendarResult};
use crate::instant::{CalendarInstant, with_minute_second};
use crate::library::CalendarLibrary;
use crate::sexagenary::ZiSect;

/// One instant matching the requested pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// 1-based position in chronological order.
    pub rank: usize,
    /// Number of candidates in the resolution.
    pub total: usize,
    /// The Gregorian instant, UTC+8.
    pub solar: NaiveDateTime,
}

/// The outcome of resolving one set of pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The pillars that were resolved.
    pub pillars: FourPillars,
    /// Wall-clock time sampled for the minute/second fill.
    pub sampled_at: NaiveDateTime,
    candidates: Vec<Candidate>,
}

impl Resolution {
    /// Candidates in ascending chronological order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Candidates latest first, for presentation.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().rev()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no instant carries the pillars.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// A candidate by 1-based rank.
    pub fn get(&self, rank: usize) -> CalendarResult<&Candidate> {
        rank.checked_sub(1)
            .and_then(|i| self.candidates.get(i))
            .ok_or(CalendarError::NoSuchCandidate {
                rank,
                total: self.candidates.len(),
            })
    }
}

/// Find every instant in the configured epoch whose pillars equal `pillars`.
///
/// Minutes and seconds follow `config.fill`; with [`TimeFill::WallClock`]
/// the clock is read exactly once. When a 节 falls inside the hour, the
/// filled time is clamped to the side of it that still carries the
/// pillars: up to the 节 for a month that opens mid-hour, or to the last
/// second before it for the month that ends there. An empty resolution is
/// a normal result, not an error.
pub fn resolve<L, C>(
    library: &L,
    clock: &C,
    config: &CalendarConfig,
    pillars: &FourPillars,
) -> CalendarResult<Resolution>
where
    L: CalendarLibrary + ?Sized,
    C: Clock + ?Sized,
{
    let sampled_at = clock.now();
    let (minute, second) = match config.fill {
        TimeFill::WallClock => (sampled_at.minute(), sampled_at.second()),
        TimeFill::Fixed { minute, second } => (minute, second),
    };

    let starts = library.pillars_to_solar_dates(pillars, config.sect, config.epoch)?;

    let mut instants = Vec::with_capacity(starts.len());
    for start in starts {
        let Some(filled) = with_minute_second(start, minute, second) else {
            continue;
        };
        let at = filled.max(start);
        if library.exact_pillars(at, config.sect)? == *pillars {
            instants.push(at);
        } else if library.exact_pillars(start, config.sect)? == *pillars {
            let clamped = last_matching(library, config.sect, pillars, start, at)?;
            debug!(%filled, %clamped, "a 节 falls inside the hour, clamped before it");
            instants.push(clamped);
        } else {
            debug!(%start, "candidate does not carry its pillars");
        }
    }
    instants.sort();
    instants.dedup();

    let total = instants.len();
    let candidates = instants
        .into_iter()
        .enumerate()
        .map(|(i, solar)| Candidate {
            rank: i + 1,
            total,
            solar,
        })
        .collect();

    info!(%pillars, total, "resolved pillars");
    Ok(Resolution {
        pillars: *pillars,
        sampled_at,
        candidates,
    })
}

/// Latest whole second in `[lo, hi)` still carrying `pillars`, given that
/// `lo` does and `hi` does not.
fn last_matching<L: CalendarLibrary + ?Sized>(
    library: &L,
    sect: ZiSect,
    pillars: &FourPillars,
    mut lo: NaiveDateTime,
    mut hi: NaiveDateTime,
) -> CalendarResult<NaiveDateTime> {
    while (hi - lo).num_seconds() > 1 {
        let mid = lo + TimeDelta::seconds((hi - lo).num_seconds() / 2);
        if library.exact_pillars(mid, sect)? == *pillars {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(lo)
}

/// Derive the full calendar description of one candidate.
pub fn select<L: CalendarLibrary + ?Sized>(
    library: &L,
    resolution: &Resolution,
    rank: usize,
    config: &CalendarConfig,
) -> CalendarResult<CalendarInstant> {
    let candidate = resolution.get(rank)?;
    CalendarInstant::describe(library, candidate.solar, config.sect)
}
