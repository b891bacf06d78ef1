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

use std::sync::Arc;

use crate::review::ReviewService;
use crate::scheduler::Scheduler;
use crate::store::Database;

/// The immutable application context, built once at startup and cloned
/// into request handlers. There is no per-session server state: the
/// headword travels with the client between phases.
#[derive(Clone)]
pub struct AppState {
    pub reviews: ReviewService,
}

impl AppState {
    pub fn new(db: Database, scheduler: Arc<dyn Scheduler + Send + Sync>) -> Self {
        Self {
            reviews: ReviewService::new(db, scheduler),
        }
    }
}
