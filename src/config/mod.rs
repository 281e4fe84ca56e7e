/*!
Configuration of the mass-function engine.

The algorithmic core exposes exactly one numerical tunable: the constant ε which governs
[`MassFunction::clean`](crate::mass::MassFunction::clean) (the threshold below which a focal's
value is dropped as numerical noise) and
[`MassFunction::has_valid_sum`](crate::mass::MassFunction::has_valid_sum) (the tolerance around
1.0 a mass function's values must sum within to be considered valid).

Most construction in this crate does not require a [`Config`] at all; it exists for the rare
caller working with frames or combinations where the default tolerance is too tight or too
loose.
*/

/// The default ε: the threshold for [`Config::clean`] and the tolerance for
/// [`Config::has_valid_sum`].
pub const DEFAULT_EPSILON: f64 = 2e-6;

/// Configuration of the mass-function engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Threshold below which [`clean`](crate::mass::MassFunction::clean) drops a focal, and
    /// tolerance around 1.0 used by
    /// [`has_valid_sum`](crate::mass::MassFunction::has_valid_sum).
    pub epsilon: f64,
}

impl Default for Config {
    /// The default configuration uses ε = 2·10⁻⁶, as specified for the core.
    fn default() -> Self {
        Config {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// A configuration with a custom ε, for frames whose numerical noise floor differs from
    /// the default.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Config { epsilon }
    }
}
