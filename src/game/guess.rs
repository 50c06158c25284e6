// Use internal modules
use crate::game::error::GameError;

pub const YEAR_DIGITS: usize = 4;

/// Reads a guess typed by the player. Only four ASCII digits pass; the
/// scoring itself accepts any integer.
pub fn parse_guess(input: &str) -> Result<i32, GameError> {
    let input = input.trim();
    if input.len() != YEAR_DIGITS || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidGuessInput(input.to_owned()));
    }
    input
        .parse::<i32>()
        .map_err(|_| GameError::InvalidGuessInput(input.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digits() {
        assert_eq!(parse_guess("1999").unwrap(), 1999);
        assert_eq!(parse_guess(" 2024\n").unwrap(), 2024);
        assert_eq!(parse_guess("0999").unwrap(), 999);
    }

    #[test]
    fn rejects_other_shapes() {
        for input in ["", "99", "19999", "-199", "+199", "19a9", "١٩٩٩", "1 99"] {
            assert!(
                matches!(parse_guess(input), Err(GameError::InvalidGuessInput(_))),
                "input {:?}",
                input
            );
        }
    }
}
