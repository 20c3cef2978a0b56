// src/vector/create.rs

use super::{check_dim, Vector};
use crate::error::LinalgError;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::str::FromStr;

impl Vector {
    /// Parses the bracketed textual form, e.g. `"[ -1.2 2.0 3.1 5.8 ]"`.
    ///
    /// The text is split on whitespace. The first token must be exactly `[`
    /// and the last exactly `]`; every token in between must parse as an
    /// `f64`. The resulting dimension is the number of interior tokens.
    ///
    /// # Errors
    ///
    /// * `LinalgError::ParseError` if a bracket is missing or an interior
    ///   token is not a number.
    /// * `LinalgError::InvalidDimension` for `"[ ]"`: a vector always has at
    ///   least one element, so an empty bracket pair is rejected rather than
    ///   producing a zero-dimension vector.
    pub fn parse(text: &str) -> Result<Self, LinalgError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let (first, last) = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) if tokens.len() >= 2 => (*first, *last),
            _ => {
                debug!("Vector::parse: missing brackets in {:?}", text);
                return Err(LinalgError::ParseError {
                    token: tokens.first().copied().unwrap_or_default().to_string(),
                    input: text.to_string(),
                });
            }
        };
        if first != "[" || last != "]" {
            let token = if first != "[" { first } else { last };
            debug!("Vector::parse: expected brackets, found {:?} in {:?}", token, text);
            return Err(LinalgError::ParseError {
                token: token.to_string(),
                input: text.to_string(),
            });
        }

        let interior = &tokens[1..tokens.len() - 1];
        check_dim(interior.len(), "Vector::parse")?;

        let data = interior
            .iter()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    debug!("Vector::parse: could not parse {:?} in {:?}", token, text);
                    LinalgError::ParseError {
                        token: token.to_string(),
                        input: text.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<f64>, LinalgError>>()?;
        Ok(Vector { data })
    }

    /// Creates a vector of values drawn uniformly from `[0, 1)`.
    pub fn rand(dim: usize) -> Result<Self, LinalgError> {
        Self::rand_with_rng(dim, &mut rand::thread_rng())
    }

    /// Same as [`Vector::rand`] but draws from the supplied generator.
    pub fn rand_with_rng<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Result<Self, LinalgError> {
        check_dim(dim, "Vector::rand")?;
        let data: Vec<f64> = (0..dim).map(|_| rng.gen::<f64>()).collect();
        Ok(Vector { data })
    }

    /// Creates a vector of values drawn from the standard normal distribution.
    pub fn randn(dim: usize) -> Result<Self, LinalgError> {
        Self::randn_with_rng(dim, &mut rand::thread_rng())
    }

    /// Same as [`Vector::randn`] but draws from the supplied generator.
    pub fn randn_with_rng<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Result<Self, LinalgError> {
        check_dim(dim, "Vector::randn")?;
        let data: Vec<f64> = (0..dim)
            .map(|_| -> f64 { StandardNormal.sample(&mut *rng) })
            .collect();
        Ok(Vector { data })
    }
}

impl FromStr for Vector {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vector::parse(s)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
