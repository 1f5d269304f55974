//! Replay Self-Check
//!
//! Drives every generator method and geometry predicate from one seed,
//! hashes all outputs, then replays from the same seed and compares digests.
//! Run it on two machines and compare the printed digest to confirm they
//! agree bit for bit.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::hash::{StreamHash, StreamHasher};
use crate::core::rng::DeterministicRandom;
use crate::core::vec2::FixedVec2;
use crate::core::vec3::FixedVec3;
use crate::error::RangeError;
use crate::geometry;

/// Default scenario seed
pub const DEFAULT_SEED: i64 = 12345;

/// Default number of scenario iterations
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Half-width of the sampled coordinate range, in whole units.
const COORD_RANGE: i32 = 100;

/// Self-check configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Generator seed
    pub seed: i64,
    /// Number of scenario iterations
    pub samples: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl CheckConfig {
    /// Create config from environment variables.
    ///
    /// `LOCKSTEP_SEED` and `LOCKSTEP_SAMPLES`; missing or unparsable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            seed: lookup("LOCKSTEP_SEED")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.seed),
            samples: lookup("LOCKSTEP_SAMPLES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.samples),
        }
    }
}

/// Outcome of a self-check run.
#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    /// Crate version that produced the digest
    pub version: &'static str,
    /// Generator seed
    pub seed: i64,
    /// Number of scenario iterations
    pub samples: usize,
    /// Hex digest of the first run
    pub digest: String,
    /// Hex digest of the replay
    pub replay_digest: String,
    /// Whether both runs matched
    pub deterministic: bool,
}

/// Run the scenario twice and compare digests.
pub fn run_check(config: &CheckConfig) -> Result<CheckReport, RangeError> {
    let first = run_scenario(config.seed, config.samples)?;
    info!("First run digest: {}", hex::encode(first));

    let replay = run_scenario(config.seed, config.samples)?;
    info!("Replay digest: {}", hex::encode(replay));

    Ok(CheckReport {
        version: crate::VERSION,
        seed: config.seed,
        samples: config.samples,
        digest: hex::encode(first),
        replay_digest: hex::encode(replay),
        deterministic: first == replay,
    })
}

/// Hash the outputs of one scenario run.
pub fn run_scenario(seed: i64, samples: usize) -> Result<StreamHash, RangeError> {
    debug!(seed, samples, "running scenario");

    let mut rng = DeterministicRandom::new(seed);
    let mut hasher = StreamHasher::default();

    for _ in 0..samples {
        hasher.update_i32(rng.next_int());
        hasher.update_fixed64(rng.next_fixed64(-COORD_RANGE, COORD_RANGE)?);
        hasher.update_f64(rng.next_double());

        let a = random_point(&mut rng)?;
        let b = random_point(&mut rng)?;
        let c = random_point(&mut rng)?;
        let d = random_point(&mut rng)?;
        let size = random_size(&mut rng)?;

        hasher.update_fixed32(geometry::cross(b - a, d - c));
        hasher.update_bool(geometry::is_segment_crossing_segment(a, b, c, d));
        hasher.update_bool(geometry::is_segment_crossing_rect(a, b, c, size));
        hasher.update_bool(geometry::is_point_inside_centered_rect(a, c, size));
        hasher.update_bool(geometry::is_rect_overlap_top_left(a, size, b, size));
        hasher.update_fixed32(geometry::distance_to(a, b));
        hasher.update_vec2(geometry::lerp(a, b, rng.next_fraction()));

        let p = FixedVec3::new(a.x, a.y, c.x);
        let q = b.to_vec3();
        let box_size = FixedVec3::new(size.x, size.y, size.x);
        hasher.update_fixed32(geometry::approximate_real_distance_to(p, q));
        hasher.update_bool(geometry::is_point_inside_box(p, q, box_size));
        hasher.update_vec2(p.to_vec2());
    }

    Ok(hasher.finalize())
}

fn random_point(rng: &mut DeterministicRandom) -> Result<FixedVec2, RangeError> {
    let x = rng.next_fixed32(-COORD_RANGE, COORD_RANGE)? + rng.next_fraction();
    let y = rng.next_fixed32(-COORD_RANGE, COORD_RANGE)? + rng.next_fraction();
    Ok(FixedVec2::new(x, y))
}

fn random_size(rng: &mut DeterministicRandom) -> Result<FixedVec2, RangeError> {
    let w = rng.next_fixed32(1, COORD_RANGE)? + rng.next_fraction();
    let h = rng.next_fixed32(1, COORD_RANGE)? + rng.next_fraction();
    Ok(FixedVec2::new(w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [("LOCKSTEP_SEED", "-42"), ("LOCKSTEP_SAMPLES", " 25 ")].into();
        let config = CheckConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config, CheckConfig { seed: -42, samples: 25 });
    }

    #[test]
    fn test_config_falls_back_on_garbage() {
        let config = CheckConfig::from_lookup(|k| match k {
            "LOCKSTEP_SEED" => Some("not-a-number".to_string()),
            _ => None,
        });
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_scenario_replays_identically() {
        let first = run_scenario(7, 200).unwrap();
        let second = run_scenario(7, 200).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_depends_on_seed() {
        assert_ne!(run_scenario(7, 50).unwrap(), run_scenario(8, 50).unwrap());
    }

    #[test]
    fn test_negative_seed_scenario_runs() {
        assert!(run_scenario(-12345, 50).is_ok());
    }

    #[test]
    fn test_run_check_report() {
        let report = run_check(&CheckConfig { seed: 99, samples: 100 }).unwrap();
        assert!(report.deterministic);
        assert_eq!(report.digest, report.replay_digest);
        assert_eq!(report.digest.len(), 64);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 99);
        assert_eq!(json["deterministic"], true);
    }
}
