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

//! kairos: a spaced repetition review server for Chinese vocabulary.
//!
//! Cards live in a SQLite table keyed by headword. The review loop is
//! three stateless HTTP phases: select the next due card, reveal its
//! answer, grade the recall and reschedule with FSRS.

pub mod cli;
pub mod config;
pub mod error;
pub mod fsrs;
pub mod memory;
pub mod review;
pub mod scheduler;
pub mod store;
pub mod types;
pub mod web;
