use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Resolves what the user typed after `add` to a track URI.
///
/// A number picks the entry with that ordinal from `uris` (1-based), anything
/// else is taken as a URI verbatim.
pub fn resolve_track_ref(input: &str, uris: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match input.parse::<usize>() {
        Ok(ordinal) => ordinal
            .checked_sub(1)
            .and_then(|index| uris.get(index))
            .cloned(),
        Err(_) => Some(input.to_string()),
    }
}
