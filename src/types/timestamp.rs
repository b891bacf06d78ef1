// Copyright 2025 The Kairos Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::DateTime;
use chrono::Duration;
use chrono::SecondsFormat;
use chrono::Utc;
use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self(ts)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Fractional days elapsed from `earlier` to `self`. Negative if
    /// `earlier` is in the future.
    pub fn days_since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0).num_seconds() as f64 / 86_400.0
    }

    pub fn to_rfc3339(self) -> String {
        // Fixed-width UTC rendering, so the lexicographic order of stored
        // timestamps matches chronological order.
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_rfc3339()))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        let ts =
            DateTime::parse_from_rfc3339(&string).map_err(|e| FromSqlError::Other(Box::new(e)))?;
        let ts = ts.with_timezone(&Utc);
        Ok(Timestamp(ts))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::new(Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_days_since() {
        let t0 = ts(0);
        let t1 = t0.add_days(3);
        assert_eq!(t1.days_since(t0), 3.0);
        assert_eq!(t0.days_since(t1), -3.0);
    }

    #[test]
    fn test_rendering_is_fixed_width_and_ordered() {
        let a = ts(1_000_000);
        let b = Timestamp::new(Utc.timestamp_opt(1_000_000, 500_000_000).unwrap());
        let c = ts(1_000_001);
        assert_eq!(a.to_rfc3339().len(), b.to_rfc3339().len());
        assert!(a.to_rfc3339() < b.to_rfc3339());
        assert!(b.to_rfc3339() < c.to_rfc3339());
    }
}
