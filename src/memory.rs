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

use crate::fsrs::Difficulty;
use crate::fsrs::Stability;
use crate::types::card::Card;
use crate::types::state::MemoryState;
use crate::types::timestamp::Timestamp;

/// A card's memory state in the scheduling algorithm's representation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AlgorithmCard {
    pub stability: Stability,
    pub difficulty: Difficulty,
    /// Whole days since the last review. Zero for never-reviewed cards.
    pub elapsed_days: u64,
    /// Whole days between the last review and the scheduled due date.
    pub scheduled_days: u64,
    pub reps: u32,
    pub lapses: u32,
    pub state: MemoryState,
    pub last_review: Option<Timestamp>,
}

/// Map a stored card into the algorithm's input representation. Pure.
pub fn to_algorithm_input(card: &Card, now: Timestamp) -> AlgorithmCard {
    let (elapsed_days, scheduled_days) = match card.last_review {
        // First-review convention: nothing has elapsed, nothing was
        // scheduled.
        None => (0, 0),
        Some(last_review) => {
            let elapsed = now.days_since(last_review).max(0.0).floor() as u64;
            // Ties round away from zero.
            let scheduled = card.due_at.days_since(last_review).max(0.0).round() as u64;
            (elapsed, scheduled)
        }
    };
    AlgorithmCard {
        stability: card.stability,
        difficulty: card.difficulty,
        elapsed_days,
        scheduled_days,
        reps: card.reps,
        lapses: card.lapses,
        state: card.state,
        last_review: card.last_review,
    }
}
