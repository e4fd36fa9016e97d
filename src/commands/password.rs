use crate::domain::models::{PasswordReport, PasswordSpec};
use crate::services::config::{ConfigFile, DEFAULT_PASSWORD_LENGTH};
use crate::services::output::print_one;
use crate::services::password;
use crate::services::rng::MersenneTwister;

#[allow(clippy::too_many_arguments)]
pub fn handle_password_command(
    json: bool,
    config: &ConfigFile,
    length: Option<usize>,
    lower: bool,
    upper: bool,
    digits: bool,
    special: bool,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    // no class flag at all means every class is enabled
    let any_class = lower || upper || digits || special;
    let spec = PasswordSpec {
        length: length
            .or(config.password.length)
            .unwrap_or(DEFAULT_PASSWORD_LENGTH),
        lower: lower || !any_class,
        upper: upper || !any_class,
        digits: digits || !any_class,
        special: special || !any_class,
    };
    let mut rng = match seed {
        Some(seed) => MersenneTwister::from_seed(seed),
        None => MersenneTwister::from_time(),
    };
    let generated = password::generate(&spec, &mut rng)?;
    let report = PasswordReport {
        length: spec.length,
        classes: password::class_names(&spec),
        password: generated,
    };
    print_one(json, report, |r| r.password.clone())
}
