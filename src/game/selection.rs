// Use 3rd party
use rand::Rng;

// Use internal modules
use crate::game::error::GameError;
use crate::model::track::Track;

/// Picks a track uniformly from the pool.
pub fn select_track<'a, R: Rng + ?Sized>(pool: &'a [Track], rng: &mut R) -> Result<&'a Track, GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    let index = rng.gen_range(0..pool.len());
    Ok(&pool[index])
}
