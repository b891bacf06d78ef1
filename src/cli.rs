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

use clap::Parser;

use crate::config::Config;
use crate::error::Fallible;
use crate::scheduler::FsrsScheduler;
use crate::store::Database;
use crate::web::server::serve;
use crate::web::state::AppState;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Start the review server.
    Serve {
        /// Path to the card database. Overrides KAIROS_DB.
        #[arg(long)]
        db: Option<String>,
        /// Port to listen on. Overrides KAIROS_PORT.
        #[arg(long)]
        port: Option<u16>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve { db, port } => {
            let config = Config::load(db, port)?;
            let db = Database::new(&config.db_path)?;
            let state = AppState::new(db, Arc::new(FsrsScheduler));
            serve(state, config.port).await
        }
    }
}
