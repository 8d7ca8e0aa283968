//! Cooldown deadline and window types.

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// The sole persisted entity: when the current cooldown ends.
///
/// `None` means no cooldown is active and submissions are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CooldownState {
    deadline: Option<DateTime<Utc>>,
}

impl CooldownState {
    /// No active cooldown.
    pub fn open() -> Self {
        Self { deadline: None }
    }

    /// Cooldown running until `deadline`.
    ///
    /// The deadline is kept at microsecond precision, the resolution of the
    /// state file, rounding up so the cooldown never ends early.
    pub fn until(deadline: DateTime<Utc>) -> Self {
        let truncated = deadline.trunc_subsecs(6);
        let deadline = if truncated < deadline {
            truncated
                .checked_add_signed(Duration::microseconds(1))
                .unwrap_or(truncated)
        } else {
            truncated
        };
        Self {
            deadline: Some(deadline),
        }
    }

    /// The deadline, if a cooldown is active.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Whether submissions are currently rejected.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether a deadline exists and `now` has reached it.
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Time left until the deadline, `None` when open or already elapsed.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline - now)
            .filter(|left| *left > Duration::zero())
    }
}

/// Configured length of a cooldown, collapsed from hours/minutes/seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CooldownWindow(Duration);

impl CooldownWindow {
    /// Build a window from its configured parts.
    pub fn from_parts(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(
            Duration::hours(i64::from(hours))
                + Duration::minutes(i64::from(minutes))
                + Duration::seconds(i64::from(seconds)),
        )
    }

    /// The window as a duration.
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Longest window a configuration may ask for, in days.
    pub const MAX_DAYS: i64 = 3650;

    /// Whether the window is longer than [`Self::MAX_DAYS`].
    pub fn exceeds_limit(&self) -> bool {
        self.0 > Duration::days(Self::MAX_DAYS)
    }

    /// Deadline for a cooldown starting at `now`.
    ///
    /// `None` if the deadline falls outside the representable date range.
    pub fn deadline_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        now.checked_add_signed(self.0)
    }
}

impl From<Duration> for CooldownWindow {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl std::fmt::Display for CooldownWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", describe_duration(self.0))
    }
}

/// Render a duration as e.g. `2h 5m 10s`, dropping zero leading units.
pub(crate) fn describe_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    match (hours, minutes) {
        (0, 0) => format!("{}s", seconds),
        (0, _) => format!("{}m {}s", minutes, seconds),
        _ => format!("{}h {}m {}s", hours, minutes, seconds),
    }
}
