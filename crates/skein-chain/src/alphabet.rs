//! Alphabet preparation: validation and the deterministic seeded shuffle.

use crate::error::ConfigError;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Smallest alphabet the codec accepts. One character is reserved as the
/// padding marker, so three characters leave a radix of two.
pub(crate) const MIN_ALPHABET_LEN: usize = 3;

/// Deterministically shuffles `alphabet` using `seed` as the sole source of
/// randomness.
///
/// The permutation is a frozen contract: Fisher-Yates walking the index from
/// `len - 1` down to `1`, swap target drawn as `next_u64() % (i + 1)` from a
/// PCG64-MCG stream seeded via `seed_from_u64`. Identical `(alphabet, seed)`
/// pairs yield identical output on every machine and every run; previously
/// issued chains stay decodable only as long as this holds. Distinct seeds
/// carry no uniqueness guarantee and may collide on short alphabets.
pub fn shuffle(alphabet: &str, seed: u64) -> String {
    let mut chars: Vec<char> = alphabet.chars().collect();
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    for i in (1..chars.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        chars.swap(i, j);
    }
    chars.into_iter().collect()
}

/// Prepares an alphabet for codec construction: identity when no seed is
/// given, [`shuffle`] otherwise. The input is never mutated.
pub fn prepare(alphabet: &str, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => shuffle(alphabet, seed),
        None => alphabet.to_owned(),
    }
}

pub(crate) fn validate(chars: &[char]) -> Result<(), ConfigError> {
    if chars.len() < MIN_ALPHABET_LEN {
        return Err(ConfigError::AlphabetTooSmall {
            got: chars.len(),
            min: MIN_ALPHABET_LEN,
        });
    }

    for (i, &c) in chars.iter().enumerate() {
        if chars[..i].contains(&c) {
            return Err(ConfigError::DuplicateCharacter(c));
        }
    }

    Ok(())
}
