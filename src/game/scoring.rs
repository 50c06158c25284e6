//! Proximity score of a guess.

pub const MAX_SCORE: u32 = 100;
pub const PENALTY_PER_YEAR: u32 = 10;
/// Guesses further off than this score nothing.
pub const MAX_SCORED_DIFF: u32 = 10;

pub fn year_diff(a: i32, b: i32) -> u32 {
    let diff = (i64::from(a) - i64::from(b)).unsigned_abs();
    u32::try_from(diff).unwrap_or(u32::MAX)
}

/// `100 - 10 * diff` within ten years of the release, 0 beyond.
///
/// `guessed_year` is taken as is. Checking that it looks like a year is the
/// job of the input layer (see [`crate::game::guess::parse_guess`]).
pub fn score(correct_year: i32, guessed_year: i32) -> u32 {
    let diff = year_diff(correct_year, guessed_year);
    if diff > MAX_SCORED_DIFF {
        return 0;
    }
    MAX_SCORE.saturating_sub(PENALTY_PER_YEAR * diff)
}
