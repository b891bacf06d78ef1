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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;

use crate::types::card::Card;

pub fn page_template(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-Hans" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "kairos" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (body)
            }
        }
    }
}

/// The front of a card: the headword only, with the headword carried as
/// the identity token for the reveal phase.
pub fn front_page(card: &Card) -> Markup {
    html! {
        div.root {
            div.card {
                div.front {
                    h1.headword { (card.headword) }
                }
                div.controls {
                    form action="/reveal" method="post" {
                        input type="hidden" name="front" value=(card.headword);
                        input id="reveal" type="submit" value="Reveal";
                    }
                }
            }
        }
    }
}

/// The back of a card: full detail plus the four grade buttons. The grade
/// form resubmits the headword; the server trusts nothing else from it.
pub fn back_page(card: &Card) -> Markup {
    html! {
        div.root {
            div.card {
                div.back {
                    h1.headword { (card.headword) }
                    p.pinyin { (card.pinyin) }
                    p.definition.english { (card.english_definition) }
                    p.definition.chinese { (card.chinese_definition) }
                    @if card.freq > 0 {
                        p.freq { "frequency rank " (card.freq) }
                    }
                }
                div.controls {
                    form action="/grade" method="post" {
                        input type="hidden" name="front" value=(card.headword);
                        button id="again" type="submit" name="rating" value="1" { "Again" }
                        button id="hard" type="submit" name="rating" value="2" { "Hard" }
                        button id="good" type="submit" name="rating" value="3" { "Good" }
                        button id="easy" type="submit" name="rating" value="4" { "Easy" }
                    }
                }
            }
        }
    }
}

pub fn all_reviewed_page() -> Markup {
    html! {
        div.finished {
            h1 { "All cards reviewed!" }
        }
    }
}
