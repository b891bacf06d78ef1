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
use std::sync::Mutex;
use std::sync::MutexGuard;

use rusqlite::Connection;
use rusqlite::Row;
use rusqlite::Transaction;

use crate::error::Error;
use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// The card store. The connection is built once at startup and shared
/// across request handlers.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

const CARD_QUERY: &str = "select headword, pinyin, english_definition, chinese_definition, freq, stability, difficulty, lapses, state, last_review, due_at, reps_ct from entries";

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        let conn = Arc::new(Mutex::new(conn));
        Ok(Self { conn })
    }

    /// Find the card with the earliest due date among cards due at `now`.
    /// Returns None when nothing is due; that is a normal outcome. Ties on
    /// `due_at` break by headword ascending, so the result is
    /// deterministic.
    pub fn find_next_due(&self, now: Timestamp) -> Fallible<Option<Card>> {
        let conn = self.acquire();
        let sql = format!("{CARD_QUERY} where due_at <= ? order by due_at asc, headword asc limit 1");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([now])?;
        match rows.next()? {
            Some(row) => Ok(Some(read_card(row)?)),
            None => Ok(None),
        }
    }

    /// Exact-match lookup. None is a normal outcome (e.g. stale client
    /// state).
    pub fn find_by_headword(&self, headword: &str) -> Fallible<Option<Card>> {
        let conn = self.acquire();
        let sql = format!("{CARD_QUERY} where headword = ?");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([headword])?;
        match rows.next()? {
            Some(row) => Ok(Some(read_card(row)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the scheduling fields of the row matching the card's
    /// headword, in a single statement. Display fields are never rewritten
    /// here.
    pub fn persist(&self, card: &Card) -> Fallible<()> {
        let sql = "update entries set stability = ?, difficulty = ?, lapses = ?, state = ?, last_review = ?, due_at = ?, reps_ct = ? where headword = ?";
        let conn = self.acquire();
        let updated = conn.execute(
            sql,
            (
                card.stability,
                card.difficulty,
                card.lapses,
                card.state,
                card.last_review,
                card.due_at,
                card.reps,
                &card.headword,
            ),
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!(
                "no card with headword {:?}",
                card.headword
            )));
        }
        Ok(())
    }

    /// Insert a full card row. Card creation is outside the review
    /// workflow; this exists for seeding and tests.
    pub fn insert_card(&self, card: &Card) -> Fallible<()> {
        let sql = "insert into entries (headword, pinyin, english_definition, chinese_definition, freq, stability, difficulty, lapses, state, last_review, due_at, reps_ct) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
        let conn = self.acquire();
        conn.execute(
            sql,
            (
                &card.headword,
                &card.pinyin,
                &card.english_definition,
                &card.chinese_definition,
                card.freq,
                card.stability,
                card.difficulty,
                card.lapses,
                card.state,
                card.last_review,
                card.due_at,
                card.reps,
            ),
        )?;
        Ok(())
    }

    fn acquire(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

fn read_card(row: &Row) -> rusqlite::Result<Card> {
    Ok(Card {
        headword: row.get(0)?,
        pinyin: row.get(1)?,
        english_definition: row.get(2)?,
        chinese_definition: row.get(3)?,
        freq: row.get(4)?,
        stability: row.get(5)?,
        difficulty: row.get(6)?,
        lapses: row.get(7)?,
        state: row.get(8)?,
        last_review: row.get(9)?,
        due_at: row.get(10)?,
        reps: row.get(11)?,
    })
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["entries"], |row| row.get(0))?;
    Ok(count > 0)
}
