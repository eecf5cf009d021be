//! Prefixed identifiers for rows created at request time.
//!
//! Ids combine the creation timestamp in milliseconds with a random
//! suffix so concurrent requests within the same millisecond do not
//! collide.

use chrono::Utc;

fn prefixed(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u16 = rand::random();
    format!("{prefix}{millis}-{suffix:04X}")
}

pub fn customer_id() -> String {
    prefixed("C")
}

pub fn inquiry_id() -> String {
    prefixed("I")
}

pub fn position_id() -> String {
    prefixed("IP")
}
