use serde::{Deserialize, Serialize};

use crate::initializer::Initializer;
use crate::RbfError;

/// A single hidden unit: a Gaussian receptive field with a trainable
/// position, spread and per-output weight vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Centre {
    coordinates: Vec<f64>,
    spread: f64,
    weights: Vec<f64>,
    /// Result of the most recent [`activate`](Centre::activate) call. The
    /// update operations read it, so an update for a pattern is only valid
    /// when preceded, in the same step, by an activation on that pattern.
    #[serde(skip)]
    last_activation: f64,
}

/// Sum of squared per-dimension differences. This is the *squared* distance;
/// the Gaussian exponent wants it unrooted.
fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum()
}

impl Centre {
    /// Places a centre at `coordinates` and draws one weight per output
    /// neuron from `init`.
    pub fn new(
        coordinates: Vec<f64>,
        spread: f64,
        outputs: usize,
        init: &mut dyn Initializer,
    ) -> Self {
        let weights = (0..outputs).map(|_| init.get()).collect();
        Centre {
            coordinates,
            spread,
            weights,
            last_activation: 0.,
        }
    }

    /// Gaussian response to `pattern`: `exp(-d2 / (2 * spread^2))` where `d2`
    /// is the squared distance from the centre. Caches the result for the
    /// update operations. A pattern of the wrong length leaves the cache
    /// untouched.
    pub fn activate(&mut self, pattern: &[f64]) -> Result<f64, RbfError> {
        if pattern.len() != self.coordinates.len() {
            return Err(RbfError::DimensionMismatch {
                expected: self.coordinates.len(),
                found: pattern.len(),
            });
        }
        let d2 = squared_distance(pattern, &self.coordinates);
        let activation = (-d2 / (2. * self.spread * self.spread)).exp();
        self.last_activation = activation;
        Ok(activation)
    }

    /// Error signal propagated back through this centre's output weights,
    /// shared by the coordinate and spread rules.
    fn weighted_error(&self, errors: &[f64]) -> f64 {
        errors
            .iter()
            .zip(&self.weights)
            .map(|(e, w)| e * w * self.last_activation)
            .sum()
    }

    /// One full gradient step for this centre: coordinates, spread and
    /// weights together. Every delta is computed from the values held at
    /// entry, so no family observes another family's write within the step.
    pub fn update(
        &mut self,
        pattern: &[f64],
        errors: &[f64],
        rate: f64,
    ) -> Result<(), RbfError> {
        if pattern.len() != self.coordinates.len() {
            return Err(RbfError::DimensionMismatch {
                expected: self.coordinates.len(),
                found: pattern.len(),
            });
        }
        let g = self.weighted_error(errors);
        let s2 = self.spread * self.spread;
        let d2 = squared_distance(pattern, &self.coordinates);
        let spread = self.spread + rate * g * d2 / (self.spread * s2);

        for (c, x) in self.coordinates.iter_mut().zip(pattern) {
            *c += rate * g * (x - *c) / s2;
        }
        for (w, e) in self.weights.iter_mut().zip(errors) {
            *w += rate * e * self.last_activation;
        }
        self.spread = spread;
        if spread <= 0. {
            return Err(RbfError::SpreadCollapsed { spread });
        }
        Ok(())
    }

    /// Moves the centre towards (or away from) `pattern`. Each dimension's
    /// delta uses its own pre-update coordinate.
    pub fn update_coordinates(&mut self, pattern: &[f64], errors: &[f64], rate: f64) {
        let g = self.weighted_error(errors);
        let s2 = self.spread * self.spread;
        for (c, x) in self.coordinates.iter_mut().zip(pattern) {
            *c += rate * g * (x - *c) / s2;
        }
    }

    /// Widens or narrows the receptive field. A step that lands at or below
    /// zero is fatal; the collapsed value is reported, not clamped.
    pub fn update_spread(
        &mut self,
        pattern: &[f64],
        errors: &[f64],
        rate: f64,
    ) -> Result<(), RbfError> {
        let g = self.weighted_error(errors);
        let d2 = squared_distance(pattern, &self.coordinates);
        self.spread += rate * g * d2 / (self.spread * self.spread * self.spread);
        if self.spread <= 0. {
            return Err(RbfError::SpreadCollapsed {
                spread: self.spread,
            });
        }
        Ok(())
    }

    /// Steps every output weight by `rate * error * last_activation`.
    pub fn update_weights(&mut self, errors: &[f64], rate: f64) {
        for (w, e) in self.weights.iter_mut().zip(errors) {
            *w += rate * e * self.last_activation;
        }
    }

    //getters
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
    pub fn spread(&self) -> f64 {
        self.spread
    }
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
    pub fn last_activation(&self) -> f64 {
        self.last_activation
    }
}
