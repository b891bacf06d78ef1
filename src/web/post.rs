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

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use serde::Deserialize;

use crate::error::Error;
use crate::types::timestamp::Timestamp;
use crate::web::state::AppState;
use crate::web::view::back_page;
use crate::web::view::page_template;

#[derive(Deserialize)]
pub struct RevealForm {
    #[serde(default)]
    front: String,
}

#[derive(Deserialize)]
pub struct GradeForm {
    #[serde(default)]
    front: String,
    #[serde(default)]
    rating: String,
}

/// Phase two: reveal the full card. A missing or stale headword routes
/// back to select-due rather than failing.
pub async fn reveal_handler(
    State(state): State<AppState>,
    Form(form): Form<RevealForm>,
) -> Result<Response, Error> {
    match state.reviews.reveal(&form.front)? {
        Some(card) => Ok(Html(page_template(back_page(&card)).into_string()).into_response()),
        None => Ok(Redirect::to("/review").into_response()),
    }
}

/// Phase three: grade and reschedule, then loop back to select-due.
pub async fn grade_handler(
    State(state): State<AppState>,
    Form(form): Form<GradeForm>,
) -> Result<Redirect, Error> {
    state
        .reviews
        .grade(&form.front, &form.rating, Timestamp::now())?;
    Ok(Redirect::to("/review"))
}
