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

//! The three-phase review workflow: select-due, reveal, grade.
//!
//! Each phase is stateless on the server; the headword travels with the
//! client as a plain form value and the card is re-fetched by headword at
//! every phase. Only the rating is client input that influences persisted
//! state, and it is validated against the closed enumeration before the
//! scheduler runs.

use std::sync::Arc;

use crate::error::Error;
use crate::error::Fallible;
use crate::memory::to_algorithm_input;
use crate::scheduler::Scheduler;
use crate::scheduler::apply_outcome;
use crate::store::Database;
use crate::types::card::Card;
use crate::types::rating::parse_rating;
use crate::types::timestamp::Timestamp;

#[derive(Clone)]
pub struct ReviewService {
    db: Database,
    scheduler: Arc<dyn Scheduler + Send + Sync>,
}

impl ReviewService {
    pub fn new(db: Database, scheduler: Arc<dyn Scheduler + Send + Sync>) -> Self {
        Self { db, scheduler }
    }

    /// Phase one: the next card due for review, or None when everything
    /// has been reviewed.
    pub fn select_due(&self, now: Timestamp) -> Fallible<Option<Card>> {
        self.db.find_next_due(now)
    }

    /// Phase two: re-fetch the card named by the client. None means the
    /// card disappeared (stale client state) and the caller should route
    /// back to select-due.
    pub fn reveal(&self, headword: &str) -> Fallible<Option<Card>> {
        let headword = headword.trim();
        if headword.is_empty() {
            return Ok(None);
        }
        self.db.find_by_headword(headword)
    }

    /// Phase three: grade the card and persist the rescheduled state.
    /// Nothing is persisted on any failure.
    pub fn grade(&self, headword: &str, rating: &str, now: Timestamp) -> Fallible<Card> {
        let headword = headword.trim();
        if headword.is_empty() {
            return Err(Error::Validation("empty headword".to_string()));
        }
        let card = self
            .db
            .find_by_headword(headword)?
            .ok_or_else(|| Error::NotFound(format!("no card with headword {headword:?}")))?;
        // The display state and the submission must agree on which card is
        // being graded.
        if card.headword != headword {
            return Err(Error::Consistency(format!(
                "submitted headword {headword:?} does not match card {:?}",
                card.headword
            )));
        }
        let rating = parse_rating(rating)?;
        let outcomes = self.scheduler.schedule_all(&to_algorithm_input(&card, now), now);
        let updated = apply_outcome(&card, outcomes.for_rating(rating));
        self.db.persist(&updated)?;
        log::debug!(
            "graded {} {} S={:.2} D={:.2} due={}",
            updated.headword,
            rating.as_str(),
            updated.stability,
            updated.difficulty,
            updated.due_at.to_rfc3339()
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::memory::AlgorithmCard;
    use crate::scheduler::Outcome;
    use crate::scheduler::Outcomes;
    use crate::types::state::MemoryState;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::new(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn card(headword: &str, due_at: Timestamp) -> Card {
        Card {
            headword: headword.to_string(),
            pinyin: "nǐ hǎo".to_string(),
            english_definition: "hello".to_string(),
            chinese_definition: "打招呼用语".to_string(),
            freq: 1,
            stability: 0.0,
            difficulty: 0.0,
            lapses: 0,
            state: MemoryState::New,
            last_review: None,
            due_at,
            reps: 0,
        }
    }

    fn test_db() -> Database {
        let dir = tempfile::tempdir().unwrap().keep();
        let path = dir.join("kairos.db");
        Database::new(path.to_str().unwrap()).unwrap()
    }

    /// A deterministic stub: reschedules every rating one day out with
    /// fixed parameters, and records whether it was ever invoked.
    struct StubScheduler {
        calls: Mutex<usize>,
    }

    impl StubScheduler {
        fn new() -> Self {
            Self {
                calls: Mutex::new(0),
            }
        }
    }

    impl Scheduler for StubScheduler {
        fn schedule_all(&self, card: &AlgorithmCard, now: Timestamp) -> Outcomes {
            *self.calls.lock().unwrap() += 1;
            let outcome = Outcome {
                stability: 1.0,
                difficulty: 5.0,
                state: MemoryState::Review,
                lapses: card.lapses,
                last_review: now,
                due_at: now.add_days(1),
                reps: card.reps + 1,
            };
            Outcomes {
                again: outcome,
                hard: outcome,
                good: outcome,
                easy: outcome,
            }
        }
    }

    fn service() -> (ReviewService, Database, Arc<StubScheduler>) {
        let db = test_db();
        let scheduler = Arc::new(StubScheduler::new());
        let service = ReviewService::new(db.clone(), scheduler.clone());
        (service, db, scheduler)
    }

    #[test]
    fn test_select_due() {
        let (service, db, _) = service();
        let now = ts(1_000_000);
        assert!(service.select_due(now).unwrap().is_none());
        db.insert_card(&card("你好", now.add_days(-1))).unwrap();
        let due = service.select_due(now).unwrap().unwrap();
        assert_eq!(due.headword, "你好");
    }

    #[test]
    fn test_reveal() {
        let (service, db, _) = service();
        let now = ts(1_000_000);
        db.insert_card(&card("你好", now.add_days(-1))).unwrap();
        let revealed = service.reveal("你好").unwrap().unwrap();
        assert_eq!(revealed.english_definition, "hello");
        // Unknown and empty headwords route back, they are not errors.
        assert!(service.reveal("再见").unwrap().is_none());
        assert!(service.reveal("").unwrap().is_none());
    }

    #[test]
    fn test_grade_happy_path() {
        let (service, db, scheduler) = service();
        let now = ts(1_000_000);
        db.insert_card(&card("你好", now.add_days(-1))).unwrap();
        let updated = service.grade("你好", "3", now).unwrap();
        assert_eq!(updated.reps, 1);
        assert_eq!(updated.state, MemoryState::Review);
        assert_eq!(updated.last_review, Some(now));
        assert!(updated.due_at > now);
        assert_eq!(*scheduler.calls.lock().unwrap(), 1);
        // Persisted.
        let fetched = db.find_by_headword("你好").unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[test]
    fn test_grade_invalid_rating_never_schedules_or_persists() {
        let (service, db, scheduler) = service();
        let now = ts(1_000_000);
        let original = card("你好", now.add_days(-1));
        db.insert_card(&original).unwrap();
        for raw in ["0", "99", "abc", ""] {
            let result = service.grade("你好", raw, now);
            assert!(matches!(result, Err(Error::Validation(_))));
        }
        assert_eq!(*scheduler.calls.lock().unwrap(), 0);
        let fetched = db.find_by_headword("你好").unwrap().unwrap();
        assert_eq!(fetched, original);
    }

    #[test]
    fn test_grade_unknown_headword() {
        let (service, _, scheduler) = service();
        let now = ts(1_000_000);
        let result = service.grade("再见", "3", now);
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(*scheduler.calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_grade_empty_headword() {
        let (service, _, _) = service();
        let result = service.grade("", "3", ts(1_000_000));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_grade_cycle_preserves_display_fields() {
        let (service, db, _) = service();
        let now = ts(1_000_000);
        let original = card("你好", now.add_days(-1));
        db.insert_card(&original).unwrap();
        service.grade("你好", "4", now).unwrap();
        let fetched = db.find_by_headword("你好").unwrap().unwrap();
        assert_eq!(fetched.headword, original.headword);
        assert_eq!(fetched.pinyin, original.pinyin);
        assert_eq!(fetched.english_definition, original.english_definition);
        assert_eq!(fetched.chinese_definition, original.chinese_definition);
        assert_eq!(fetched.freq, original.freq);
    }
}
