//! Runtime configuration
//!
//! Built from command-line flags by the binary and validated before the
//! terminal is taken over.

use crate::algorithms::Algorithm;
use crate::errors::ConfigError;
use crate::input::{ArraySource, FixedArray, RandomArray};
use crate::playback::DEFAULT_INTERVAL;
use std::time::Duration;

/// Default number of bars
pub const DEFAULT_LENGTH: usize = 15;

/// Default upper bound for random values
pub const DEFAULT_MAX_VALUE: i64 = 20;

/// Largest array the chart can show one bar per element for
pub const MAX_LENGTH: usize = 100;

/// Fastest allowed playback
pub const MIN_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub length: usize,
    pub max_value: i64,
    /// Fixed input; overrides random generation when set
    pub values: Option<Vec<i64>>,
    pub seed: Option<u64>,
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::BubbleSort,
            length: DEFAULT_LENGTH,
            max_value: DEFAULT_MAX_VALUE,
            values: None,
            seed: None,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(values) = &self.values {
            if values.len() > MAX_LENGTH {
                return Err(ConfigError::TooManyValues {
                    got: values.len(),
                    max: MAX_LENGTH,
                });
            }
        } else {
            if self.length == 0 || self.length > MAX_LENGTH {
                return Err(ConfigError::InvalidLength {
                    got: self.length,
                    max: MAX_LENGTH,
                });
            }
            if self.max_value < 1 {
                return Err(ConfigError::InvalidMaxValue(self.max_value));
            }
        }

        let interval_ms = self.interval.as_millis() as u64;
        if interval_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::InvalidInterval {
                got: interval_ms,
                min: MIN_INTERVAL_MS,
            });
        }

        Ok(())
    }

    /// The array source these settings describe
    pub fn source(&self) -> Box<dyn ArraySource> {
        match (&self.values, self.seed) {
            (Some(values), _) => Box::new(FixedArray::new(values)),
            (None, Some(seed)) => Box::new(RandomArray::seeded(self.length, self.max_value, seed)),
            (None, None) => Box::new(RandomArray::new(self.length, self.max_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_length_and_interval() {
        let empty = Config {
            length: 0,
            ..Config::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::InvalidLength { got: 0, .. })
        ));

        let fast = Config {
            interval: Duration::from_millis(10),
            ..Config::default()
        };
        assert!(matches!(
            fast.validate(),
            Err(ConfigError::InvalidInterval { got: 10, .. })
        ));
    }

    #[test]
    fn test_fixed_values_override_length() {
        let config = Config {
            length: 0,
            values: Some(vec![3, 1, 2]),
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let values: Vec<i64> = config.source().generate().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }
}
