use std::io;

use anyhow::Context;
use lotto::{play_round, Console};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED_VAR: &str = "LOTTO_SEED";

/// Seeded generator when `raw` is set, OS entropy otherwise.
fn rng_from_seed(raw: Option<&str>) -> anyhow::Result<StdRng> {
    let Some(raw) = raw else {
        return Ok(StdRng::from_os_rng());
    };
    let seed: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?;
    log::info!("main.rng: seeded from {SEED_VAR}={seed}");
    Ok(StdRng::seed_from_u64(seed))
}

fn rng_from_env() -> anyhow::Result<StdRng> {
    match std::env::var(SEED_VAR) {
        Ok(raw) => rng_from_seed(Some(&raw)),
        Err(std::env::VarError::NotPresent) => rng_from_seed(None),
        Err(err) => Err(err).with_context(|| format!("reading {SEED_VAR}")),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rng = rng_from_env()?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    play_round(&mut console, &mut rng)?;
    Ok(())
}
