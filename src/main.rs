//! Lockstep Math Self-Check
//!
//! Replays a seeded scenario through every generator method and geometry
//! predicate and prints the output digest as JSON. Matching digests across
//! machines mean matching simulations.

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lockstep_math::check::{run_check, CheckConfig};
use lockstep_math::VERSION;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Lockstep Math v{}", VERSION);

    let config = CheckConfig::from_env();
    info!("Seed: {}", config.seed);
    info!("Samples: {}", config.samples);

    let report = run_check(&config).context("scenario rejected a random range")?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.deterministic {
        info!("DETERMINISM VERIFIED: digests match");
        Ok(())
    } else {
        error!("DETERMINISM FAILURE: digests differ");
        bail!("replay digest {} != {}", report.replay_digest, report.digest)
    }
}
