//! The divination session aggregate.
//!
//! A session owns everything one divination needs: the pillar input, the
//! latest resolution and chosen moment, the casting engine and its
//! randomness, and the calendar library and clock it was configured with.

use std::fmt;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use qg_calendar::{
    CalendarInstant, CalendarLibrary, Clock, Moment, Resolution, StandardCalendar, SystemClock,
    resolve, select,
};
use qg_casting::{
    CastLine, CastStatus, Caster, Hexagram, LinePosition, ProtocolKind, RandomnessService,
    Reading,
};
use qg_core::{Completion, InputEvent, Outcome, PillarInput, PillarKind, QgError};

use crate::config::SessionConfig;
use crate::divination::Divination;
use crate::error::{SessionError, SessionResult};

/// Unique identifier of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An interactive divination session.
pub struct DivinationSession<L = StandardCalendar, C = SystemClock> {
    id: SessionId,
    config: SessionConfig,
    input: PillarInput,
    resolution: Option<Resolution>,
    instant: Option<CalendarInstant>,
    caster: Caster,
    rng: Box<dyn RandomnessService>,
    library: L,
    clock: C,
}

impl DivinationSession {
    /// A session on the built-in calendar and the system clock.
    pub fn new(config: SessionConfig) -> Self {
        let rng = Box::new(config.cast.rng());
        Self::with_parts(config, StandardCalendar, SystemClock, rng)
    }
}

impl<L: CalendarLibrary, C: Clock> DivinationSession<L, C> {
    /// A session on the given collaborators.
    pub fn with_parts(
        config: SessionConfig,
        library: L,
        clock: C,
        rng: Box<dyn RandomnessService>,
    ) -> Self {
        let id = SessionId::new();
        info!(session = %id, protocol = %config.cast.protocol, "session started");
        Self {
            id,
            config,
            input: PillarInput::new(),
            resolution: None,
            instant: None,
            caster: config.cast.caster(),
            rng,
            library,
            clock,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The pillar input state.
    pub fn input(&self) -> &PillarInput {
        &self.input
    }

    /// The latest resolution, present while the pillars are complete.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// The selected or described moment.
    pub fn instant(&self) -> Option<&CalendarInstant> {
        self.instant.as_ref()
    }

    /// The casting engine.
    pub fn caster(&self) -> &Caster {
        &self.caster
    }

    /// The casting engine, for protocol operations that need no randomness.
    pub fn caster_mut(&mut self) -> &mut Caster {
        &mut self.caster
    }

    /// The calendar library.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Apply one pillar entry event.
    ///
    /// Completing the chart resolves it to candidate instants straight away;
    /// any accepted change discards the previous resolution and moment. A
    /// rejected entry leaves everything as it was.
    pub fn apply(&mut self, event: InputEvent) -> SessionResult<Outcome> {
        let (next, outcome) = self.input.apply(event);
        if !outcome.accepted {
            return Ok(outcome);
        }
        let changed = next != self.input;
        self.input = next;
        if changed {
            self.resolution = None;
            self.instant = None;
        }
        if changed && self.input.is_complete() {
            self.resolve_input()?;
        }
        Ok(outcome)
    }

    fn resolve_input(&mut self) -> SessionResult<()> {
        let pillars = self.input.to_four_pillars()?;
        match resolve(&self.library, &self.clock, &self.config.calendar, &pillars) {
            Ok(resolution) => {
                info!(session = %self.id, candidates = resolution.len(), "pillars resolved");
                self.resolution = Some(resolution);
                Ok(())
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "pillar resolution failed");
                Err(e.into())
            }
        }
    }

    /// Whether the pillar chart is complete, and what is missing if not.
    pub fn completion(&self) -> Completion {
        self.input.completion()
    }

    /// Choose a resolved candidate by 1-based rank.
    pub fn select(&mut self, rank: usize) -> SessionResult<&CalendarInstant> {
        let resolution = self.resolution.as_ref().ok_or(SessionError::NoResolution)?;
        let instant = select(&self.library, resolution, rank, &self.config.calendar)?;
        info!(session = %self.id, rank, solar = %instant.solar, "candidate selected");
        Ok(&*self.instant.insert(instant))
    }

    /// Describe the moment by date instead of by pillars.
    ///
    /// The pillar input is replaced with the moment's exact pillars.
    pub fn describe(&mut self, moment: Moment) -> SessionResult<&CalendarInstant> {
        let at = moment.to_solar(&self.library)?;
        let instant =
            CalendarInstant::describe(&self.library, at, self.config.calendar.sect)?;
        if let Some(pillars) = &instant.pillars {
            self.input = PillarInput::from_pillars(pillars);
        }
        self.resolution = None;
        info!(session = %self.id, solar = %at, "moment described");
        Ok(&*self.instant.insert(instant))
    }

    /// The moment right now, per the session clock.
    pub fn describe_now(&mut self) -> SessionResult<&CalendarInstant> {
        let now = self.clock.now();
        let moment = Moment::Gregorian {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        };
        self.describe(moment)
    }

    /// Switch casting protocol, discarding the current protocol's state.
    pub fn switch_protocol(&mut self, kind: ProtocolKind) {
        self.caster.switch(kind);
    }

    /// Draw the next line of a sequential cast.
    pub fn cast_next(&mut self) -> SessionResult<(LinePosition, CastLine)> {
        Ok(self.caster.cast_next(self.rng.as_mut())?)
    }

    /// Draw all six lines of a one-shot cast.
    pub fn cast_all(&mut self) -> SessionResult<Hexagram> {
        Ok(self.caster.cast_all(self.rng.as_mut())?)
    }

    /// Identify the cast hexagram, with spirits when the day stem is known.
    pub fn reading(&self) -> SessionResult<Reading> {
        let hexagram = self.caster.hexagram()?;
        Ok(hexagram.reading(self.input.stem(PillarKind::Day)))
    }

    /// Export the finished divination.
    pub fn export(&self) -> SessionResult<Divination> {
        let hexagram = self.caster.hexagram();
        let pillars = self.input.to_four_pillars();
        let (pillars, hexagram) = match (pillars, hexagram) {
            (Ok(pillars), Ok(hexagram)) => (pillars, hexagram),
            (pillars, _) => {
                let fields = match pillars {
                    Err(QgError::Incomplete(fields)) => fields,
                    Err(e) => return Err(e.into()),
                    Ok(_) => Vec::new(),
                };
                let lines = match self.caster.status() {
                    CastStatus::Incomplete { filled } => filled,
                    CastStatus::Complete => 6,
                };
                return Err(SessionError::Incomplete { fields, lines });
            }
        };
        let reading = hexagram.reading(Some(pillars.day.stem()));
        info!(session = %self.id, primary = %reading.primary.full_name, "divination exported");
        Ok(Divination {
            session: self.id,
            exported_at: self.clock.now(),
            pillars,
            instant: self.instant,
            hexagram,
            reading,
        })
    }

    /// Start over: clear the pillars, the moment and the cast.
    pub fn reset(&mut self) {
        self.input = PillarInput::new();
        self.resolution = None;
        self.instant = None;
        self.caster.reset();
        info!(session = %self.id, "session reset");
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use qg_calendar::{CalendarError, FixedClock, LunarDate};
    use qg_casting::{CastError, Draw, ScriptedDraws};
    use qg_core::{Branch, Field, FourPillars, Slot, Stem};

    use super::*;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 15)
                .unwrap(),
        )
    }

    fn session(codes: &[&str]) -> DivinationSession<StandardCalendar, FixedClock> {
        let draws = ScriptedDraws::new(codes.iter().map(|c| c.parse::<Draw>().unwrap()));
        let config = SessionConfig::default().with_epoch(1900, 2000);
        DivinationSession::with_parts(config, StandardCalendar, clock(), Box::new(draws))
    }

    fn enter(session: &mut DivinationSession<StandardCalendar, FixedClock>, chart: &str) {
        let pillars: FourPillars = chart.parse().unwrap();
        let events = [
            InputEvent::SetStem(Slot::Year, pillars.year.stem()),
            InputEvent::SetBranch(PillarKind::Year, pillars.year.branch()),
            InputEvent::SetBranch(PillarKind::Month, pillars.month.branch()),
            InputEvent::SetStem(Slot::Day, pillars.day.stem()),
            InputEvent::SetBranch(PillarKind::Day, pillars.day.branch()),
            InputEvent::SetBranch(PillarKind::Hour, pillars.hour.branch()),
        ];
        for event in events {
            assert!(session.apply(event).unwrap().accepted);
        }
    }

    #[test]
    fn completion_resolves_automatically() {
        let mut s = session(&[]);
        enter(&mut s, "己丑 癸酉 甲子 壬申");
        let resolution = s.resolution().unwrap();
        assert!(!resolution.is_empty());
        let founding = resolution
            .candidates()
            .iter()
            .find(|c| c.solar.date() == NaiveDate::from_ymd_opt(1949, 10, 1).unwrap());
        assert!(founding.is_some());
        // Minute and second come from the clock.
        assert!(
            resolution
                .candidates()
                .iter()
                .all(|c| c.solar.minute() == 30)
        );
    }

    #[test]
    fn clearing_drops_the_resolution() {
        let mut s = session(&[]);
        enter(&mut s, "己丑 癸酉 甲子 壬申");
        s.select(1).unwrap();
        s.apply(InputEvent::Clear(Field::DayBranch)).unwrap();
        assert!(s.resolution().is_none());
        assert!(s.instant().is_none());
        assert!(matches!(s.select(1), Err(SessionError::NoResolution)));
    }

    #[test]
    fn rejected_entry_changes_nothing() {
        let mut s = session(&[]);
        s.apply(InputEvent::SetStem(Slot::Year, Stem::Jia)).unwrap();
        let outcome = s
            .apply(InputEvent::SetBranch(PillarKind::Year, Branch::Chou))
            .unwrap();
        assert!(!outcome.accepted);
        assert_eq!(s.input().branch(PillarKind::Year), None);
    }

    #[test]
    fn select_out_of_range() {
        let mut s = session(&[]);
        enter(&mut s, "己丑 癸酉 甲子 壬申");
        let total = s.resolution().unwrap().len();
        assert!(matches!(
            s.select(total + 1),
            Err(SessionError::Calendar(CalendarError::NoSuchCandidate { .. }))
        ));
    }

    #[test]
    fn describe_fills_pillars() {
        let mut s = session(&[]);
        let instant = s
            .describe(Moment::Lunar {
                date: LunarDate::new(2024, 1, false, 1),
                hour: 9,
                minute: 0,
                second: 0,
            })
            .unwrap();
        assert_eq!(
            instant.solar.date(),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
        assert!(s.input().is_complete());
        assert_eq!(s.input().stem(PillarKind::Year), Some(Stem::Jia));
    }

    #[test]
    fn export_needs_both_parts() {
        let mut s = session(&["135", "100", "100", "110", "110", "110"]);
        s.apply(InputEvent::SetStem(Slot::Day, Stem::Jia)).unwrap();
        for _ in 0..5 {
            s.cast_next().unwrap();
        }
        match s.export() {
            Err(SessionError::Incomplete { fields, lines }) => {
                assert_eq!(fields.len(), 5);
                assert_eq!(lines, 5);
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }

        s.cast_next().unwrap();
        enter(&mut s, "己丑 癸酉 甲子 壬申");
        s.select(1).unwrap();
        let divination = s.export().unwrap();
        assert_eq!(divination.pillars.to_string(), "己丑年 癸酉月 甲子日 壬申时");
        assert_eq!(divination.reading.primary.name, "泰");
        assert_eq!(divination.reading.changed.as_ref().unwrap().name, "升");
        assert!(divination.instant.is_some());
        assert!(divination.to_json().unwrap().contains("\"session\""));
    }

    #[test]
    fn switching_protocol_clears_cast() {
        let mut s = session(&["135", "246"]);
        s.cast_next().unwrap();
        s.switch_protocol(ProtocolKind::Numeric);
        assert_eq!(s.caster().status(), CastStatus::Incomplete { filled: 0 });
        assert!(matches!(
            s.cast_next(),
            Err(SessionError::Cast(CastError::WrongProtocol { .. }))
        ));
        s.caster_mut().push_digit('1').unwrap();
        assert_eq!(s.caster().kind(), ProtocolKind::Numeric);
    }

    #[test]
    fn reset_starts_over() {
        let mut s = session(&["135"]);
        enter(&mut s, "己丑 癸酉 甲子 壬申");
        s.cast_next().unwrap();
        s.reset();
        assert!(!s.input().is_complete());
        assert!(s.resolution().is_none());
        assert_eq!(s.caster().status(), CastStatus::Incomplete { filled: 0 });
    }
}
