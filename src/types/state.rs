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

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;

use crate::error::Error;

/// A card's position in the memory-model lifecycle. Stored as an integer,
/// matching the FSRS state numbering.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemoryState {
    New,
    Learning,
    Review,
    Relearning,
}

impl MemoryState {
    pub fn as_int(&self) -> i64 {
        match self {
            MemoryState::New => 0,
            MemoryState::Learning => 1,
            MemoryState::Review => 2,
            MemoryState::Relearning => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MemoryState::New => "new",
            MemoryState::Learning => "learning",
            MemoryState::Review => "review",
            MemoryState::Relearning => "relearning",
        }
    }
}

impl TryFrom<i64> for MemoryState {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MemoryState::New),
            1 => Ok(MemoryState::Learning),
            2 => Ok(MemoryState::Review),
            3 => Ok(MemoryState::Relearning),
            _ => Err(Error::Validation(format!("invalid memory state: {value}"))),
        }
    }
}

impl ToSql for MemoryState {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_int()))
    }
}

impl FromSql for MemoryState {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let int: i64 = FromSql::column_result(value)?;
        MemoryState::try_from(int).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
