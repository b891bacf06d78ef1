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

use std::env;

use crate::error::Error;
use crate::error::Fallible;

const DB_VAR: &str = "KAIROS_DB";
const PORT_VAR: &str = "KAIROS_PORT";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub db_path: String,
    pub port: u16,
}

impl Config {
    /// Resolve configuration from CLI overrides and the environment.
    /// Missing required configuration is fatal: nothing is served.
    pub fn load(db_path: Option<String>, port: Option<u16>) -> Fallible<Self> {
        let db_path = match db_path {
            Some(path) => path,
            None => env_required(DB_VAR)?,
        };
        let port = match port {
            Some(port) => port,
            None => match env::var(PORT_VAR) {
                Ok(raw) => raw.parse().map_err(|_| {
                    Error::Config(format!("{PORT_VAR} is not a valid port: {raw:?}"))
                })?,
                Err(_) => DEFAULT_PORT,
            },
        };
        Ok(Self { db_path, port })
    }
}

fn env_required(key: &str) -> Fallible<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!(
            "missing required environment variable {key}"
        ))),
    }
}
