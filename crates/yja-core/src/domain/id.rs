//! Identifier generator.
//!
//! Ids look like `p_<random fraction in base 36><timestamp in base 36>`.
//! No central counter is involved; uniqueness rests on the random part.

use chrono::Utc;
use rand::Rng;

/// Namespace prefix of every post id.
pub const ID_PREFIX: &str = "p_";

/// Upper bound on base-36 digits taken from the random fraction.
const FRACTION_DIGITS: usize = 11;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh post id from thread-local randomness and the current time.
pub fn generate_id() -> String {
    let fraction: f64 = rand::thread_rng().r#gen();
    encode_id(fraction, Utc::now().timestamp_millis())
}

/// Build an id from a fraction in `[0, 1)` and a millisecond timestamp.
pub fn encode_id(fraction: f64, millis: i64) -> String {
    let mut id = String::from(ID_PREFIX);
    id.push_str(&fraction_to_base36(fraction));
    id.push_str(&int_to_base36(millis.unsigned_abs()));
    id
}

fn fraction_to_base36(fraction: f64) -> String {
    let mut digits = String::with_capacity(FRACTION_DIGITS);
    let mut rest = fraction.fract().abs();

    while rest > 0.0 && digits.len() < FRACTION_DIGITS {
        rest *= 36.0;
        let digit = rest.trunc() as usize;
        digits.push(BASE36[digit.min(35)] as char);
        rest -= rest.trunc();
    }

    digits
}

fn int_to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8_lossy(&digits).into_owned()
}
