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

//! The FSRS-4.5 scheduling formulas.
//!
//! Pure math: no clock, no storage. The workflow reaches this only through
//! the `Scheduler` trait, so the whole module is swappable.

use crate::types::rating::Rating;

pub type Stability = f64;
pub type Difficulty = f64;

/// The default FSRS-4.5 model weights.
const W: [f64; 17] = [
    0.4872, 1.4003, 3.7145, 13.8206, 5.1618, 1.2298, 0.8975, 0.031, 1.6474, 0.1367, 1.0461,
    2.1072, 0.0793, 0.3246, 1.587, 0.2272, 2.8755,
];

const DECAY: f64 = -0.5;
const FACTOR: f64 = 19.0 / 81.0;

const MIN_DIFFICULTY: Difficulty = 1.0;
const MAX_DIFFICULTY: Difficulty = 10.0;
const MIN_STABILITY: Stability = 0.01;

/// Probability of recall after `t` days at stability `s`.
pub fn retrievability(t: f64, s: Stability) -> f64 {
    (1.0 + FACTOR * t / s.max(MIN_STABILITY)).powf(DECAY)
}

/// The interval, in days, after which retrievability decays to `r`.
pub fn interval(r: f64, s: Stability) -> f64 {
    (s / FACTOR) * (r.powf(1.0 / DECAY) - 1.0)
}

/// Stability after the first review.
pub fn initial_stability(rating: Rating) -> Stability {
    let s = match rating {
        Rating::Again => W[0],
        Rating::Hard => W[1],
        Rating::Good => W[2],
        Rating::Easy => W[3],
    };
    s.max(MIN_STABILITY)
}

/// Difficulty after the first review.
pub fn initial_difficulty(rating: Rating) -> Difficulty {
    let g = rating.as_int() as f64;
    (W[4] - (W[5] * (g - 1.0)).exp() + 1.0).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Difficulty after a subsequent review, with mean reversion towards the
/// initial Easy difficulty.
pub fn new_difficulty(d: Difficulty, rating: Rating) -> Difficulty {
    let g = rating.as_int() as f64;
    let next = d - W[6] * (g - 3.0);
    let reverted = W[7] * initial_difficulty(Rating::Easy) + (1.0 - W[7]) * next;
    reverted.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Stability after a subsequent review.
pub fn new_stability(d: Difficulty, s: Stability, r: f64, rating: Rating) -> Stability {
    match rating {
        Rating::Again => forget_stability(d, s, r),
        _ => recall_stability(d, s, r, rating),
    }
}

fn recall_stability(d: Difficulty, s: Stability, r: f64, rating: Rating) -> Stability {
    let hard_penalty = if rating == Rating::Hard { W[15] } else { 1.0 };
    let easy_bonus = if rating == Rating::Easy { W[16] } else { 1.0 };
    let growth = W[8].exp()
        * (11.0 - d)
        * s.powf(-W[9])
        * ((W[10] * (1.0 - r)).exp() - 1.0)
        * hard_penalty
        * easy_bonus;
    (s * (growth + 1.0)).max(MIN_STABILITY)
}

fn forget_stability(d: Difficulty, s: Stability, r: f64) -> Stability {
    let next = W[11] * d.powf(-W[12]) * ((s + 1.0).powf(W[13]) - 1.0) * (W[14] * (1.0 - r)).exp();
    // A lapse can only lose stability.
    next.min(s).max(MIN_STABILITY)
}
