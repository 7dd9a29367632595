//! Array sources
//!
//! Where the arrays being sorted come from. The sort engines never depend on
//! this; the session asks its source for a fresh array on every reset.

use crate::errors::ConfigError;
use crate::snapshot::Element;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the initial array for a run
pub trait ArraySource {
    fn generate(&mut self) -> Vec<Element>;
}

/// Uniform random values in `1..=max_value`, labelled with their value
#[derive(Clone)]
pub struct RandomArray {
    length: usize,
    max_value: i64,
    rng: StdRng,
}

impl RandomArray {
    pub fn new(length: usize, max_value: i64) -> Self {
        RandomArray {
            length,
            max_value: max_value.max(1),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of arrays
    pub fn seeded(length: usize, max_value: i64, seed: u64) -> Self {
        RandomArray {
            length,
            max_value: max_value.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ArraySource for RandomArray {
    fn generate(&mut self) -> Vec<Element> {
        (0..self.length)
            .map(|_| Element::from_value(self.rng.random_range(1..=self.max_value)))
            .collect()
    }
}

/// The same user-supplied array on every reset
#[derive(Debug, Clone)]
pub struct FixedArray {
    elements: Vec<Element>,
}

impl FixedArray {
    pub fn new(values: &[i64]) -> Self {
        FixedArray {
            elements: values.iter().copied().map(Element::from_value).collect(),
        }
    }
}

impl ArraySource for FixedArray {
    fn generate(&mut self) -> Vec<Element> {
        self.elements.clone()
    }
}

/// Parse a comma or whitespace separated list of integers, e.g. `3,1,2`
pub fn parse_values(text: &str) -> Result<Vec<i64>, ConfigError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_values_in_range() {
        let mut source = RandomArray::seeded(50, 20, 7);
        let values: Vec<i64> = source.generate().iter().map(|e| e.value).collect();

        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (1..=20).contains(v)));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RandomArray::seeded(10, 100, 42);
        let mut b = RandomArray::seeded(10, 100, 42);

        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("3,1, 2"), Ok(vec![3, 1, 2]));
        assert_eq!(parse_values(""), Ok(vec![]));
        assert_eq!(
            parse_values("3,x"),
            Err(ConfigError::InvalidValue("x".to_string()))
        );
    }
}
