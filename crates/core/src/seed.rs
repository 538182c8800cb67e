//! Seed codec - turns a 16-card draw into a short base-36 token and back
//!
//! Encoding maps every card to one decimal digit (10 becomes `0`), reads the 16 digits
//! as a decimal number and prints that number in base 36 (`0-9A-Z`).
//!
//! Compatibility note:
//! Tokens are interchangeable with the seeds printed by earlier versions of the game.
//! That format is lossy: leading `0` digits vanish when the numeral is read back as an
//! integer, so a draw whose first card is 10 decodes to fewer than 16 cards and
//! [`validate`] rejects its token. [`is_replayable`] tells the caller in advance.

use arrayvec::{ArrayString, ArrayVec};

use crate::error::SeedError;
use crate::types::{Card, DRAW_LEN};

/// Base-36 digits of `u64::MAX`
pub const MAX_SEED_LEN: usize = 13;

/// Decimal digits of `u64::MAX`
pub const MAX_DECODED_LEN: usize = 20;

/// A seed token, stack allocated
pub type SeedToken = ArrayString<MAX_SEED_LEN>;

/// Cards recovered from a token, before the length check
pub type DecodedDraw = ArrayVec<Card, MAX_DECODED_LEN>;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encode a draw into its seed token.
///
/// # Examples
///
/// ```
/// use jospel_core::seed::{decode_draw, encode};
/// use jospel_core::types::Card;
///
/// let draw = [3, 7, 1, 9, 2, 2, 5, 8, 6, 4, 10, 1, 9, 3, 7, 5].map(|v| Card::new(v).unwrap());
/// let token = encode(&draw);
/// assert_eq!(decode_draw(&token), Ok(draw));
/// ```
pub fn encode(draw: &[Card; DRAW_LEN]) -> SeedToken {
    // 16 decimal digits always fit in a u64.
    let numeral = draw
        .iter()
        .fold(0u64, |acc, card| acc * 10 + u64::from(card.digit()));
    to_base36(numeral)
}

fn to_base36(mut n: u64) -> SeedToken {
    let mut digits = ArrayVec::<u8, MAX_SEED_LEN>::new();
    loop {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }

    let mut token = SeedToken::new();
    for &b in digits.iter().rev() {
        token.push(b as char);
    }
    token
}

/// Decode a token into cards without checking the count.
///
/// Accepts upper or lower case and ignores surrounding whitespace.
pub fn decode(token: &str) -> Result<DecodedDraw, SeedError> {
    let trimmed = token.trim();
    let fail = |reason: String| SeedError::Decode {
        token: token.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(fail("seed is empty".to_string()));
    }
    // from_str_radix would also accept a leading sign.
    if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(fail(format!("invalid character {bad:?}")));
    }
    let numeral = u64::from_str_radix(trimmed, 36).map_err(|e| fail(e.to_string()))?;

    Ok(numeral
        .to_string()
        .bytes()
        .filter_map(|b| Card::from_digit(b - b'0'))
        .collect())
}

/// Decode a token into a full draw, rejecting anything but exactly 16 cards.
pub fn decode_draw(token: &str) -> Result<[Card; DRAW_LEN], SeedError> {
    let decoded = decode(token)?;
    decoded
        .as_slice()
        .try_into()
        .map_err(|_| SeedError::Length { len: decoded.len() })
}

/// Check a token without keeping the draw.
pub fn validate(token: &str) -> Result<(), SeedError> {
    decode_draw(token).map(|_| ())
}

/// Whether `encode(draw)` decodes back to `draw`.
///
/// False exactly when the first card is a 10 (its `0` digit is lost).
pub fn is_replayable(draw: &[Card; DRAW_LEN]) -> bool {
    draw[0].digit() != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(values: [u8; DRAW_LEN]) -> [Card; DRAW_LEN] {
        values.map(|v| Card::new(v).unwrap())
    }

    #[test]
    fn test_encode_known_value() {
        // 1111111111111111 in base 36
        let d = draw([1; DRAW_LEN]);
        assert_eq!(encode(&d).as_str(), "AXUTEBILS7");
        assert_eq!(decode_draw("AXUTEBILS7"), Ok(d));
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let d = draw([9, 8, 7, 6, 5, 4, 3, 2, 1, 10, 9, 8, 7, 6, 5, 4]);
        let token = encode(&d);
        assert_eq!(decode_draw(&token.to_lowercase()), Ok(d));
        assert_eq!(decode_draw(&format!("  {token}\n")), Ok(d));
    }

    #[test]
    fn test_tens_inside_the_draw_survive() {
        let d = draw([1, 10, 10, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 10]);
        assert!(is_replayable(&d));
        assert_eq!(decode_draw(&encode(&d)), Ok(d));
    }

    #[test]
    fn test_leading_ten_loses_a_card() {
        let d = draw([10, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6]);
        assert!(!is_replayable(&d));
        let token = encode(&d);
        assert_eq!(decode(&token).map(|c| c.len()), Ok(15));
        assert_eq!(validate(&token), Err(SeedError::Length { len: 15 }));
    }

    #[test]
    fn test_validate_rejects_bad_characters() {
        for token in ["", "   ", "AB-CD", "+1", "Ä1", "12 34"] {
            assert!(
                matches!(validate(token), Err(SeedError::Decode { .. })),
                "{token:?} should fail to decode"
            );
        }
    }

    #[test]
    fn test_validate_rejects_overflow() {
        // 14 base-36 digits exceed u64.
        assert!(matches!(
            validate("ZZZZZZZZZZZZZZ"),
            Err(SeedError::Decode { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_short_and_long_numerals() {
        assert_eq!(validate("1"), Err(SeedError::Length { len: 1 }));
        assert_eq!(validate("0"), Err(SeedError::Length { len: 1 }));
        // u64::MAX has 20 decimal digits.
        assert_eq!(validate("3W5E11264SGSF"), Err(SeedError::Length { len: 20 }));
    }
}
