pub mod error;
pub mod guess;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod year;

// Use 3rd party
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Use internal modules
use crate::client::Catalog;
use crate::model::track::Track;

pub use crate::game::error::GameError;
pub use crate::game::guess::parse_guess;
pub use crate::game::scoring::score;
pub use crate::game::selection::select_track;
pub use crate::game::session::{reduce, Event, GuessSession, Outcome, Phase, RoundResult, Transition};
pub use crate::game::year::{extract_year, extract_year_or, ReleaseYear};

/// Drives a [`GuessSession`] against a live catalog.
///
/// The pool fetch is the only await point: a round either starts from the
/// pool already held or waits for one fetch and then selects synchronously.
pub struct Game<R: Rng = StdRng> {
    catalog: Catalog,
    session: GuessSession,
    rng: R,
}

impl Game<StdRng> {
    /// Seeds the random source from the configured seed, or from the OS
    /// when there is none.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let rng = match catalog.config().seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self {
            catalog,
            session: GuessSession::new(),
            rng,
        }
    }

    pub fn session(&self) -> &GuessSession {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn apply(&mut self, event: Event) -> Result<Outcome, GameError> {
        let Transition { session, outcome } = reduce(&self.session, event, &mut self.rng);
        self.session = session;
        outcome
    }

    /// Starts a round, fetching a pool first when the session has none.
    ///
    /// On `UpstreamUnavailable` or `EmptyPool` the session is back to idle
    /// with no track and the call can simply be repeated.
    pub async fn next_round(&mut self) -> Result<&Track, GameError> {
        if let Outcome::FetchRequested { generation } = self.apply(Event::NextRound)? {
            let result = self.catalog.tracks().pool().await;
            self.apply(Event::PoolFetched { generation, result })?;
        }
        self.session.current_track().ok_or(GameError::NoTrackSelected)
    }

    /// Validates the player's input and scores it against the current track.
    pub fn guess(&mut self, input: &str) -> Result<RoundResult, GameError> {
        let year = parse_guess(input)?;
        self.apply(Event::SubmitGuess(year))?;
        let result = self.session.last_result().ok_or(GameError::NoTrackSelected)?;
        info!(
            "guessed {} for {}: {} points, {} total",
            result.guessed_year,
            result.correct_year,
            result.score,
            self.session.cumulative_score()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::config;
    use mockito::{Matcher, Server, ServerGuard};

    async fn mock_search(server: &mut ServerGuard, status: usize, file_path: &str) -> mockito::Mock {
        server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("term".into(), "pop".into()))
            .with_status(status)
            .with_body_from_file(file_path)
            .create_async()
            .await
    }

    fn game(server: &ServerGuard) -> Game {
        Game::new(Catalog::new(config(server).seed(99)))
    }

    #[tokio::test]
    async fn round_from_search() {
        let mut server = Server::new_async().await;
        let mock = mock_search(&mut server, 200, "tests/files/itunes_search.json").await;

        let mut game = game(&server);
        let track = game.next_round().await.unwrap().clone();
        assert!(game.session().track_pool().contains(&track));
        assert_eq!(game.session().track_pool().len(), 3);
        assert_eq!(game.session().phase(), Phase::AwaitingGuess);

        let year = track.release_year().year;
        let result = game.guess(&year.to_string()).unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(game.session().phase(), Phase::Revealed);

        // The pool is reused, no second request
        game.next_round().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_search_is_empty_pool() {
        let mut server = Server::new_async().await;
        let _mock = mock_search(&mut server, 200, "tests/files/itunes_search_empty.json").await;

        let mut game = game(&server);
        let result = game.next_round().await;
        assert!(matches!(result, Err(GameError::EmptyPool)));
        assert_eq!(game.session().phase(), Phase::Idle);
        assert!(game.session().current_track().is_none());
    }

    #[tokio::test]
    async fn failed_search_can_be_retried() {
        let mut server = Server::new_async().await;
        let failing = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"error": "Failed to fetch from iTunes"}"#)
            .create_async()
            .await;

        let mut game = game(&server);
        let result = game.next_round().await;
        match result {
            Err(err @ GameError::UpstreamUnavailable(_)) => assert!(err.is_retryable()),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(game.session().track_pool().is_empty());

        failing.remove_async().await;
        let _mock = mock_search(&mut server, 200, "tests/files/itunes_search.json").await;
        assert!(game.next_round().await.is_ok());
        assert_eq!(game.session().generation(), 2);
    }

    #[tokio::test]
    async fn invalid_guess_leaves_round_open() {
        let mut server = Server::new_async().await;
        let _mock = mock_search(&mut server, 200, "tests/files/itunes_search.json").await;

        let mut game = game(&server);
        game.next_round().await.unwrap();

        let result = game.guess("99");
        assert!(matches!(result, Err(GameError::InvalidGuessInput(_))));
        assert_eq!(game.session().phase(), Phase::AwaitingGuess);

        game.guess("2000").unwrap();
        let total = game.session().cumulative_score();
        assert!(matches!(game.guess("2000"), Err(GameError::AlreadyScored)));
        assert_eq!(game.session().cumulative_score(), total);
    }

    #[tokio::test]
    async fn guess_before_round() {
        let server = Server::new_async().await;
        let mut game = game(&server);
        assert!(matches!(game.guess("2000"), Err(GameError::NoTrackSelected)));
    }

    #[tokio::test]
    async fn seeded_games_pick_the_same_track() {
        let mut server = Server::new_async().await;
        let _mock = mock_search(&mut server, 200, "tests/files/itunes_search.json").await;

        let first = game(&server).next_round().await.unwrap().clone();
        let mut other = game(&server);
        let second = other.next_round().await.unwrap().clone();
        assert_eq!(first, second);
    }
}
