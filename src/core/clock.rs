use crate::domain::ports::Clock;
use crate::utils::error::{Result, WidgetError};
use chrono::{DateTime, Local, NaiveDateTime};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// 解析 `--at` 參數：RFC 3339 轉成本地時間，或直接當作本地的 `YYYY-MM-DD HH:MM:SS`
pub fn parse_instant(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| WidgetError::TimeParseError {
            input: input.to_string(),
        })
}
