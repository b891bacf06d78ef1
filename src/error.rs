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

pub type Fallible<T> = Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed, missing, or out-of-range client input.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A headword with no matching card. A normal, recoverable outcome
    /// where the workflow allows it.
    #[error("not found: {0}")]
    NotFound(String),

    /// The submitted identity and the fetched card disagree.
    #[error("consistency error: {0}")]
    Consistency(String),

    /// Query or connectivity failure against the card store.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed startup configuration. Fatal: nothing is
    /// served.
    #[error("configuration error: {0}")]
    Config(String),
}
