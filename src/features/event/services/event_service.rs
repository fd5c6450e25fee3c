use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::features::event::dtos::{CountdownParts, CountdownResponseDto, FaqItemDto};
use crate::features::event::faq::FAQ;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Static event content and the countdown to opening
pub struct EventService {
    start_at: DateTime<FixedOffset>,
}

impl EventService {
    pub fn new(start_at: DateTime<FixedOffset>) -> Self {
        Self { start_at }
    }

    pub fn faq(&self) -> Vec<FaqItemDto> {
        FAQ.iter()
            .map(|(q, a)| FaqItemDto {
                q: q.to_string(),
                a: a.to_string(),
            })
            .collect()
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> CountdownResponseDto {
        let target = self.start_at.with_timezone(&Utc);

        CountdownResponseDto {
            start_at: self.start_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            remaining: countdown_parts(target, now),
            is_over: target <= now,
        }
    }
}

/// Split `target - now` into whole units, clamped at zero
pub fn countdown_parts(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownParts {
    let mut delta = (target - now).num_milliseconds().max(0);

    let days = delta / MS_PER_DAY;
    delta -= days * MS_PER_DAY;
    let hours = delta / MS_PER_HOUR;
    delta -= hours * MS_PER_HOUR;
    let minutes = delta / MS_PER_MINUTE;
    delta -= minutes * MS_PER_MINUTE;

    CountdownParts {
        days,
        hours,
        minutes,
        seconds: delta / MS_PER_SECOND,
    }
}
