use std::env;

/// Environment variable overriding [`GeneratorConfig::seed`].
pub const SEED_ENV: &str = "EC_VECTORS_SEED";

/// Seed used when none is given, so that regenerating the vectors without
/// configuration reproduces the committed file.
pub const DEFAULT_SEED: u64 = u64::from_be_bytes(*b"zxcvbnM1");

/// How many vectors to produce and from which random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Random cases appended after the fixed `jacobian-add` cases.
    pub jacobian_add_cases: usize,
    /// Random cases appended after the fixed `mixed-add` cases.
    pub mixed_add_cases: usize,
    /// Random cases appended after the fixed `double-base-mul` cases.
    pub double_base_mul_cases: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            jacobian_add_cases: 64,
            mixed_add_cases: 64,
            double_base_mul_cases: 32,
        }
    }
}

impl GeneratorConfig {
    /// Defaults, with the seed taken from `EC_VECTORS_SEED` when it holds a
    /// decimal `u64`. Any other value is ignored with a warning.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var(SEED_ENV) {
            Ok(raw) => match raw.trim().parse() {
                Ok(seed) => config.with_seed(seed),
                Err(_) => {
                    log::warn!("ignoring {SEED_ENV}={raw:?}: not a decimal u64");
                    config
                }
            },
            Err(_) => config,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn with_random_cases(self, jacobian_add: usize, mixed_add: usize, double_base_mul: usize) -> Self {
        Self {
            jacobian_add_cases: jacobian_add,
            mixed_add_cases: mixed_add,
            double_base_mul_cases: double_base_mul,
            ..self
        }
    }
}
