//! Round lifecycle of one player.
//!
//! ```text
//! Idle ──NextRound──▶ Loading ──PoolFetched(ok)──▶ AwaitingGuess ──SubmitGuess──▶ Revealed
//!  ▲                     │                               ▲                           │
//!  └──PoolFetched(err)───┘                               └────NextRound (pool kept)──┘
//! ```
//!
//! A session never changes in place. [`reduce`] takes the current session and
//! an [`Event`] and returns the next session together with the outcome of
//! the event.

// Use 3rd party
use log::{debug, error, warn};
use rand::Rng;

// Use internal modules
use crate::client::ClientError;
use crate::game::error::GameError;
use crate::game::scoring::{score, year_diff};
use crate::game::selection::select_track;
use crate::game::year::ReleaseYear;
use crate::model::track::Track;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress.
    #[default]
    Idle,
    /// A pool fetch is in flight.
    Loading,
    AwaitingGuess,
    Revealed,
}

#[derive(Debug)]
pub enum Event {
    NextRound,
    /// Result of the fetch requested with `generation`.
    PoolFetched {
        generation: u64,
        result: Result<Vec<Track>, ClientError>,
    },
    SubmitGuess(i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The pool is empty; fetch one and report it with
    /// [`Event::PoolFetched`] carrying this generation.
    FetchRequested { generation: u64 },
    RoundStarted,
    Scored(RoundResult),
    /// A fetch result arrived for a round that is no longer waiting for it.
    StaleFetchDiscarded { generation: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub correct_year: i32,
    pub guessed_year: i32,
    pub diff: u32,
    pub score: u32,
    pub year_was_fallback: bool,
}

#[derive(Debug)]
pub struct Transition {
    pub session: GuessSession,
    pub outcome: Result<Outcome, GameError>,
}

impl Transition {
    fn ok(session: GuessSession, outcome: Outcome) -> Self {
        Self {
            session,
            outcome: Ok(outcome),
        }
    }

    fn failed(session: GuessSession, error: GameError) -> Self {
        Self {
            session,
            outcome: Err(error),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessSession {
    track_pool: Vec<Track>,
    current_track: Option<Track>,
    current_year: Option<ReleaseYear>,
    guessed_year: Option<i32>,
    cumulative_score: u32,
    last_round_score: Option<u32>,
    rounds_scored: u32,
    phase: Phase,
    generation: u64,
}

pub fn reduce<R: Rng + ?Sized>(session: &GuessSession, event: Event, rng: &mut R) -> Transition {
    match event {
        Event::NextRound => session.next_round(rng),
        Event::PoolFetched { generation, result } => session.pool_fetched(generation, result, rng),
        Event::SubmitGuess(year) => session.submit_guess(year),
    }
}

impl GuessSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that starts with a pool already loaded.
    #[must_use]
    pub fn with_pool(track_pool: Vec<Track>) -> Self {
        Self {
            track_pool,
            ..Default::default()
        }
    }

    pub fn track_pool(&self) -> &[Track] {
        &self.track_pool
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn current_year(&self) -> Option<ReleaseYear> {
        self.current_year
    }

    pub fn guessed_year(&self) -> Option<i32> {
        self.guessed_year
    }

    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    pub fn last_round_score(&self) -> Option<u32> {
        self.last_round_score
    }

    /// True exactly when the current round has been scored.
    pub fn revealed(&self) -> bool {
        self.last_round_score.is_some()
    }

    pub fn rounds_scored(&self) -> u32 {
        self.rounds_scored
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        let year = self.current_year?;
        let guessed_year = self.guessed_year?;
        let score = self.last_round_score?;
        Some(RoundResult {
            correct_year: year.year,
            guessed_year,
            diff: year_diff(year.year, guessed_year),
            score,
            year_was_fallback: year.was_fallback,
        })
    }

    fn clear_round(&mut self) {
        self.current_track = None;
        self.current_year = None;
        self.guessed_year = None;
        self.last_round_score = None;
    }

    // Played tracks stay in the pool, so a track can come up again.
    fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let track = select_track(&self.track_pool, rng)?.clone();
        let year = track.release_year();
        debug!("round started: {:?} ({:?})", track.title, year);
        self.current_track = Some(track);
        self.current_year = Some(year);
        self.phase = Phase::AwaitingGuess;
        Ok(())
    }

    fn next_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Transition {
        let mut next = self.clone();
        next.clear_round();

        if next.track_pool.is_empty() {
            // Also taken while Loading: the new generation makes the
            // in-flight fetch stale.
            next.phase = Phase::Loading;
            next.generation += 1;
            let generation = next.generation;
            debug!("pool empty, requesting fetch #{}", generation);
            return Transition::ok(next, Outcome::FetchRequested { generation });
        }

        match next.start_round(rng) {
            Ok(()) => Transition::ok(next, Outcome::RoundStarted),
            Err(err) => Transition::failed(self.clone(), err),
        }
    }

    fn pool_fetched<R: Rng + ?Sized>(
        &self,
        generation: u64,
        result: Result<Vec<Track>, ClientError>,
        rng: &mut R,
    ) -> Transition {
        if self.phase != Phase::Loading || generation != self.generation {
            debug!(
                "discarding fetch #{} (current #{}, {:?})",
                generation, self.generation, self.phase
            );
            return Transition::ok(self.clone(), Outcome::StaleFetchDiscarded { generation });
        }

        let mut next = self.clone();
        next.phase = Phase::Idle;

        match result {
            Err(err) => {
                error!("pool fetch #{} failed: {}", generation, err);
                Transition::failed(next, GameError::UpstreamUnavailable(err))
            }
            Ok(tracks) if tracks.is_empty() => {
                warn!("pool fetch #{} returned no tracks", generation);
                Transition::failed(next, GameError::EmptyPool)
            }
            Ok(tracks) => {
                debug!("pool fetch #{} returned {} tracks", generation, tracks.len());
                next.track_pool = tracks;
                match next.start_round(rng) {
                    Ok(()) => Transition::ok(next, Outcome::RoundStarted),
                    Err(err) => Transition::failed(next, err),
                }
            }
        }
    }

    fn submit_guess(&self, guessed_year: i32) -> Transition {
        let year = match (self.phase, self.current_year) {
            (Phase::AwaitingGuess, Some(year)) => year,
            (Phase::Loading, _) => return Transition::failed(self.clone(), GameError::RoundLoading),
            (Phase::Revealed, _) => return Transition::failed(self.clone(), GameError::AlreadyScored),
            _ => return Transition::failed(self.clone(), GameError::NoTrackSelected),
        };

        let round_score = score(year.year, guessed_year);
        let mut next = self.clone();
        next.guessed_year = Some(guessed_year);
        next.last_round_score = Some(round_score);
        next.cumulative_score += round_score;
        next.rounds_scored += 1;
        next.phase = Phase::Revealed;

        let result = RoundResult {
            correct_year: year.year,
            guessed_year,
            diff: year_diff(year.year, guessed_year),
            score: round_score,
            year_was_fallback: year.was_fallback,
        };
        Transition::ok(next, Outcome::Scored(result))
    }
}
