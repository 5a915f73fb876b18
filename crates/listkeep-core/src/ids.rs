//! Short random id generation.
//!
//! Ids are 7 characters of `[0-9a-z]`, the format used throughout the
//! persisted data. They are generated for lists, items and tags; no
//! uniqueness registry is kept (the space is large enough for a
//! single-user dataset, and persisted data carries its ids with it).

use rand::Rng;

const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

/// Generate a fresh short id.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_CHARS[rng.gen_range(0..ID_CHARS.len())] as char)
        .collect()
}
