//! Short random identifiers for list items
//!
//! Ids look like `id_k3f9x0a`: a fixed prefix and 7 base-36 characters.
//! They are unique enough for a single user's handful of projects and posts,
//! nothing more.

use rand::Rng;

pub const ID_PREFIX: &str = "id_";
pub const ID_SUFFIX_LEN: usize = 7;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draw a fresh id from `rng`
pub fn new_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_SUFFIX_LEN);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_SUFFIX_LEN {
        let idx = rng.random_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }
    id
}

/// Check that `id` has the shape produced by [`new_id`]
pub fn is_well_formed(id: &str) -> bool {
    match id.strip_prefix(ID_PREFIX) {
        Some(suffix) => {
            suffix.len() == ID_SUFFIX_LEN
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        }
        None => false,
    }
}
