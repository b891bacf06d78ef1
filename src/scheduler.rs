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

use crate::fsrs;
use crate::fsrs::Difficulty;
use crate::fsrs::Stability;
use crate::memory::AlgorithmCard;
use crate::types::card::Card;
use crate::types::rating::Rating;
use crate::types::state::MemoryState;
use crate::types::timestamp::Timestamp;

/// The desired recall probability at review time.
const TARGET_RECALL: f64 = 0.9;

/// The minimum review interval in days.
const MIN_INTERVAL: f64 = 1.0;

/// The maximum review interval in days.
const MAX_INTERVAL: f64 = 36500.0;

/// The candidate post-review card state for one rating.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Outcome {
    pub stability: Stability,
    pub difficulty: Difficulty,
    pub state: MemoryState,
    pub lapses: u32,
    pub last_review: Timestamp,
    pub due_at: Timestamp,
    pub reps: u32,
}

/// One outcome per rating in the closed set.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Outcomes {
    pub again: Outcome,
    pub hard: Outcome,
    pub good: Outcome,
    pub easy: Outcome,
}

impl Outcomes {
    pub fn for_rating(&self, rating: Rating) -> &Outcome {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }
}

/// The contract with the scheduling algorithm: a deterministic function of
/// the mapped card state and the wall clock, producing one candidate
/// outcome per rating.
pub trait Scheduler {
    fn schedule_all(&self, card: &AlgorithmCard, now: Timestamp) -> Outcomes;
}

/// Copy the scheduling fields from an outcome onto a new card value,
/// preserving headword and display fields unchanged.
pub fn apply_outcome(card: &Card, outcome: &Outcome) -> Card {
    Card {
        headword: card.headword.clone(),
        pinyin: card.pinyin.clone(),
        english_definition: card.english_definition.clone(),
        chinese_definition: card.chinese_definition.clone(),
        freq: card.freq,
        stability: outcome.stability,
        difficulty: outcome.difficulty,
        lapses: outcome.lapses,
        state: outcome.state,
        last_review: Some(outcome.last_review),
        due_at: outcome.due_at,
        reps: outcome.reps,
    }
}

/// The production scheduler, backed by the FSRS-4.5 formulas.
pub struct FsrsScheduler;

impl Scheduler for FsrsScheduler {
    fn schedule_all(&self, card: &AlgorithmCard, now: Timestamp) -> Outcomes {
        Outcomes {
            again: project(card, Rating::Again, now),
            hard: project(card, Rating::Hard, now),
            good: project(card, Rating::Good, now),
            easy: project(card, Rating::Easy, now),
        }
    }
}

fn project(card: &AlgorithmCard, rating: Rating, now: Timestamp) -> Outcome {
    let first_review = card.state == MemoryState::New || card.last_review.is_none();
    let (stability, difficulty) = if first_review {
        (fsrs::initial_stability(rating), fsrs::initial_difficulty(rating))
    } else {
        let retr = fsrs::retrievability(card.elapsed_days as f64, card.stability);
        (
            fsrs::new_stability(card.difficulty, card.stability, retr, rating),
            fsrs::new_difficulty(card.difficulty, rating),
        )
    };
    let interval_days = match rating {
        // Failed cards come back at the minimum interval.
        Rating::Again => MIN_INTERVAL,
        _ => fsrs::interval(TARGET_RECALL, stability)
            .round()
            .clamp(MIN_INTERVAL, MAX_INTERVAL),
    };
    let lapses = if rating == Rating::Again && card.state == MemoryState::Review {
        card.lapses + 1
    } else {
        card.lapses
    };
    Outcome {
        stability,
        difficulty,
        state: next_state(card.state, rating),
        lapses,
        last_review: now,
        due_at: now.add_days(interval_days as i64),
        reps: card.reps + 1,
    }
}

fn next_state(state: MemoryState, rating: Rating) -> MemoryState {
    match rating {
        Rating::Again => match state {
            MemoryState::New | MemoryState::Learning => MemoryState::Learning,
            MemoryState::Review | MemoryState::Relearning => MemoryState::Relearning,
        },
        Rating::Hard | Rating::Good | Rating::Easy => MemoryState::Review,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::new(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn new_card() -> AlgorithmCard {
        AlgorithmCard {
            stability: 0.0,
            difficulty: 0.0,
            elapsed_days: 0,
            scheduled_days: 0,
            reps: 0,
            lapses: 0,
            state: MemoryState::New,
            last_review: None,
        }
    }

    fn review_card(last_review: Timestamp) -> AlgorithmCard {
        AlgorithmCard {
            stability: 10.0,
            difficulty: 5.0,
            elapsed_days: 10,
            scheduled_days: 10,
            reps: 4,
            lapses: 1,
            state: MemoryState::Review,
            last_review: Some(last_review),
        }
    }

    #[test]
    fn test_first_review_advances_state() {
        let now = ts(1_000_000);
        let outcomes = FsrsScheduler.schedule_all(&new_card(), now);
        for rating in Rating::ALL {
            let outcome = outcomes.for_rating(rating);
            assert_ne!(outcome.state, MemoryState::New);
            assert_eq!(outcome.reps, 1);
            assert_eq!(outcome.lapses, 0);
            assert_eq!(outcome.last_review, now);
            assert!(outcome.due_at > now);
        }
        assert_eq!(outcomes.again.state, MemoryState::Learning);
        assert_eq!(outcomes.good.state, MemoryState::Review);
    }

    #[test]
    fn test_deterministic() {
        let now = ts(1_000_000);
        let card = review_card(now.add_days(-10));
        let a = FsrsScheduler.schedule_all(&card, now);
        let b = FsrsScheduler.schedule_all(&card, now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lapse_counted_only_from_review() {
        let now = ts(1_000_000);
        let card = review_card(now.add_days(-10));
        let outcomes = FsrsScheduler.schedule_all(&card, now);
        assert_eq!(outcomes.again.lapses, card.lapses + 1);
        assert_eq!(outcomes.again.state, MemoryState::Relearning);
        assert_eq!(outcomes.good.lapses, card.lapses);

        let mut relearning = card;
        relearning.state = MemoryState::Relearning;
        let outcomes = FsrsScheduler.schedule_all(&relearning, now);
        assert_eq!(outcomes.again.lapses, card.lapses);
    }

    #[test]
    fn test_intervals_ordered_by_rating() {
        let now = ts(1_000_000);
        let card = review_card(now.add_days(-10));
        let outcomes = FsrsScheduler.schedule_all(&card, now);
        assert!(outcomes.again.due_at <= outcomes.hard.due_at);
        assert!(outcomes.hard.due_at <= outcomes.good.due_at);
        assert!(outcomes.good.due_at <= outcomes.easy.due_at);
        // The minimum interval is one day.
        assert!(outcomes.again.due_at >= now.add_days(1));
    }

    #[test]
    fn test_apply_outcome_preserves_display_fields() {
        let now = ts(1_000_000);
        let card = Card {
            headword: "你好".to_string(),
            pinyin: "nǐ hǎo".to_string(),
            english_definition: "hello".to_string(),
            chinese_definition: "打招呼用语".to_string(),
            freq: 1,
            stability: 0.0,
            difficulty: 0.0,
            lapses: 0,
            state: MemoryState::New,
            last_review: None,
            due_at: now.add_days(-1),
            reps: 0,
        };
        let input = crate::memory::to_algorithm_input(&card, now);
        let outcomes = FsrsScheduler.schedule_all(&input, now);
        let updated = apply_outcome(&card, outcomes.for_rating(Rating::Good));
        assert_eq!(updated.headword, card.headword);
        assert_eq!(updated.pinyin, card.pinyin);
        assert_eq!(updated.english_definition, card.english_definition);
        assert_eq!(updated.chinese_definition, card.chinese_definition);
        assert_eq!(updated.freq, card.freq);
        assert_eq!(updated.reps, 1);
        assert_eq!(updated.state, MemoryState::Review);
        assert_eq!(updated.last_review, Some(now));
        assert!(updated.due_at > now);
    }
}
