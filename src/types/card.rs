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

use crate::types::state::MemoryState;
use crate::types::timestamp::Timestamp;

/// A vocabulary entry with its memory state.
///
/// `headword` is the natural key for all lookups and updates. The display
/// fields (`pinyin`, definitions, `freq`) are never rewritten by the
/// review workflow; the scheduling fields are mutated exactly once per
/// grading operation, all together.
#[derive(Clone, PartialEq, Debug)]
pub struct Card {
    pub headword: String,
    pub pinyin: String,
    pub english_definition: String,
    pub chinese_definition: String,
    /// Corpus frequency rank. Informational only.
    pub freq: u32,
    /// Memory-strength estimate, in days.
    pub stability: f64,
    /// Algorithm-scale difficulty.
    pub difficulty: f64,
    /// Count of failed reviews. Monotonically non-decreasing.
    pub lapses: u32,
    pub state: MemoryState,
    /// Absent for never-reviewed cards.
    pub last_review: Option<Timestamp>,
    /// Always defined; the card is due when now >= due_at.
    pub due_at: Timestamp,
    /// Count of total reviews. Monotonically non-decreasing.
    pub reps: u32,
}
