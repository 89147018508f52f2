//! Host configuration: simulation settings plus frame pacing and logging.
//!
//! Values come from `CROSSING_*` environment variables first, then CLI flags
//! override them. Unparsable environment values fall back to defaults; a bad
//! CLI value is an error.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::core::SimConfig;
use crate::types::FRAME_MS;

pub const USAGE: &str = "\
usage: tui-crossing [options]

  --seed N        RNG seed (default: derived from the clock)
  --cols N        field columns (default 5)
  --lanes N       obstacle lanes (default 3)
  --safe-rows N   safe rows at the bottom (default 2)
  --enemies N     enemy count (default 3)
  --frame-ms N    frame period in milliseconds (default 16)
  --log PATH      write logs to PATH (filter via CROSSING_LOG)
  --help          show this help

Every option can also be set with CROSSING_SEED, CROSSING_COLS,
CROSSING_LANES, CROSSING_SAFE_ROWS, CROSSING_ENEMIES, CROSSING_FRAME_MS
and CROSSING_LOG_PATH.";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// `None` means seed from the system clock at startup
    pub seed: Option<u32>,
    pub frame_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        let mut config = Self::default();
        let sim = &mut config.sim;
        sim.cols = parsed(&lookup, "CROSSING_COLS").unwrap_or(sim.cols);
        sim.obstacle_lanes = parsed(&lookup, "CROSSING_LANES").unwrap_or(sim.obstacle_lanes);
        sim.safe_rows = parsed(&lookup, "CROSSING_SAFE_ROWS").unwrap_or(sim.safe_rows);
        sim.enemy_count = parsed(&lookup, "CROSSING_ENEMIES").unwrap_or(sim.enemy_count);
        config.seed = parsed(&lookup, "CROSSING_SEED");
        config.frame_ms = parsed(&lookup, "CROSSING_FRAME_MS")
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(FRAME_MS);
        config.log_path = lookup("CROSSING_LOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        config
    }

    /// Apply CLI flags on top of the current values.
    ///
    /// Returns `Ok(false)` when `--help` was given and the program should
    /// print [`USAGE`] and exit.
    pub fn apply_args(&mut self, args: &[String]) -> Result<bool> {
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            if flag == "--help" || flag == "-h" {
                return Ok(false);
            }

            let value = iter
                .next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag.as_str() {
                "--seed" => self.seed = Some(parse_flag(flag, value)?),
                "--cols" => self.sim.cols = parse_flag(flag, value)?,
                "--lanes" => self.sim.obstacle_lanes = parse_flag(flag, value)?,
                "--safe-rows" => self.sim.safe_rows = parse_flag(flag, value)?,
                "--enemies" => self.sim.enemy_count = parse_flag(flag, value)?,
                "--frame-ms" => {
                    let ms: u32 = parse_flag(flag, value)?;
                    if ms == 0 {
                        bail!("--frame-ms must be positive");
                    }
                    self.frame_ms = ms;
                }
                "--log" => self.log_path = Some(PathBuf::from(value)),
                other => bail!("unknown argument: {}", other),
            }
        }
        Ok(true)
    }

    /// Simulation settings with the seed resolved.
    pub fn sim_config(&self) -> SimConfig {
        let seed = self.seed.unwrap_or_else(clock_seed);
        self.sim.clone().with_seed(seed)
    }
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
