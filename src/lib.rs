//! Yearguess is a song release year guessing game.
//!
//! A batch of songs is pulled from a public music catalog, one of them is
//! picked at random and the player guesses the year it came out. A guess
//! within ten years scores `100 - 10 * diff` points, anything further off
//! scores nothing.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! yearguess = "0.1.0"
//! ```
//!
//! Yearguess uses asynchronous programming with `async` and `await` for the
//! catalog requests only; scoring and the round state are plain functions.
//!
//! ## Catalogs
//!
//! Pools come from the iTunes Search API (`term`, `limit` and `country`
//! settings) or, when an album id is configured, from a Deezer album.
//! Neither needs credentials.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! yearguess = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use yearguess::client::Catalog;
//! use yearguess::config::CatalogConfig;
//! use yearguess::game::Game;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CatalogConfig::new("eminem").country("US");
//!     let mut game = Game::new(Catalog::new(config));
//!
//!     let track = game.next_round().await.unwrap();
//!     println!("{} - {}", track.artist, track.album);
//!
//!     let result = game.guess("2002").unwrap();
//!     println!("released {}, {} points", result.correct_year, result.score);
//! }
//! ```
//!
//! The round state machine can be driven without any network access:
//!
//! ```rust
//! use rand::SeedableRng;
//! use yearguess::game::{reduce, Event, GuessSession, Outcome};
//! use yearguess::model::track::Track;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let track = Track { release_date: "1990-05-01".to_owned(), ..Default::default() };
//! let session = GuessSession::with_pool(vec![track]);
//!
//! let session = reduce(&session, Event::NextRound, &mut rng).session;
//! let scored = reduce(&session, Event::SubmitGuess(1985), &mut rng);
//! assert!(matches!(scored.outcome, Ok(Outcome::Scored(ref r)) if r.score == 50));
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod game;
pub mod model;
