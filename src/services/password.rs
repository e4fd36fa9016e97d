//! Password composition from configurable character classes.
//!
//! Every enabled class contributes at least one character; the remaining
//! positions are drawn uniformly from the union of all enabled pools and
//! the result is shuffled so the guaranteed characters do not cluster at
//! the front.

use crate::domain::error::{CifraError, Result};
use crate::domain::models::PasswordSpec;
use crate::services::rng::MersenneTwister;
use log::debug;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Generates one password for `spec` using the supplied generator.
pub fn generate(spec: &PasswordSpec, rng: &mut MersenneTwister) -> Result<String> {
    let pools = enabled_pools(spec);
    if pools.is_empty() {
        return Err(CifraError::EmptyCharacterPool);
    }
    if spec.length == 0 || spec.length < pools.len() {
        return Err(CifraError::InvalidPasswordLength {
            length: spec.length,
            minimum: pools.len(),
        });
    }

    let union: Vec<char> = pools.iter().flat_map(|pool| pool.chars()).collect();
    debug!(
        "sampling {} characters from {} pools ({} candidates)",
        spec.length,
        pools.len(),
        union.len()
    );

    // one guaranteed pick per enabled class, the rest from the union
    let mut chars: Vec<char> = pools.iter().map(|pool| pick(pool, rng)).collect();
    while chars.len() < spec.length {
        chars.push(union[rng.next_bounded(union.len())]);
    }
    rng.shuffle(&mut chars);
    Ok(chars.into_iter().collect())
}

/// Names of the enabled classes, for reports.
pub fn class_names(spec: &PasswordSpec) -> Vec<&'static str> {
    let mut names = Vec::new();
    if spec.lower {
        names.push("lower");
    }
    if spec.upper {
        names.push("upper");
    }
    if spec.digits {
        names.push("digits");
    }
    if spec.special {
        names.push("special");
    }
    names
}

fn enabled_pools(spec: &PasswordSpec) -> Vec<&'static str> {
    let mut pools = Vec::new();
    if spec.lower {
        pools.push(LOWERCASE);
    }
    if spec.upper {
        pools.push(UPPERCASE);
    }
    if spec.digits {
        pools.push(DIGITS);
    }
    if spec.special {
        pools.push(SPECIAL);
    }
    pools
}

fn pick(pool: &str, rng: &mut MersenneTwister) -> char {
    // pools are ASCII, so byte indexing is character indexing
    pool.as_bytes()[rng.next_bounded(pool.len())] as char
}
