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

use axum::extract::State;
use axum::response::Html;

use crate::error::Error;
use crate::types::timestamp::Timestamp;
use crate::web::state::AppState;
use crate::web::view::all_reviewed_page;
use crate::web::view::front_page;
use crate::web::view::page_template;

/// Phase one: show the front of the next due card, or the "all reviewed"
/// page when nothing is due.
pub async fn review_handler(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let body = match state.reviews.select_due(Timestamp::now())? {
        Some(card) => front_page(&card),
        None => all_reviewed_page(),
    };
    Ok(Html(page_template(body).into_string()))
}
