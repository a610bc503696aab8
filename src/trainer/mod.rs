use crate::network::RbfNetwork;
use crate::RbfError;

mod logger;
pub use logger::{LogFile, Logger, MockLogger};

/// A single input/target pair. Datasets are ordered slices of these; the
/// caller's order is the order every epoch visits them in.
#[derive(Clone, Debug)]
pub struct Data {
    input: Vec<f64>,
    target: Vec<f64>,
}

impl Data {
    pub fn new<I, T>(input: I, target: T) -> Self
    where
        I: Into<Vec<f64>>,
        T: Into<Vec<f64>>,
    {
        Data {
            input: input.into(),
            target: target.into(),
        }
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }
    pub fn target(&self) -> &[f64] {
        &self.target
    }
}

impl RbfNetwork {
    /// One pass over `data` with parameter updates. For each pattern the
    /// forward response is computed first, the per-output errors are derived
    /// from it, and only then are the centres and the bias stepped, so every
    /// update sees the activations of its own pattern. Returns half the
    /// summed squared error, which is also appended to the training trace.
    pub fn train_epoch(&mut self, data: &[Data]) -> Result<f64, RbfError> {
        let mut sum_squared = 0.;
        for sample in data {
            let actual = self.forward(sample.input())?;
            if sample.target().len() != self.output_dim {
                return Err(RbfError::DimensionMismatch {
                    expected: self.output_dim,
                    found: sample.target().len(),
                });
            }
            let errors: Vec<f64> = sample
                .target()
                .iter()
                .zip(&actual)
                .map(|(t, a)| t - a)
                .collect();
            sum_squared += errors.iter().map(|e| e * e).sum::<f64>();

            let rate = self.learning_rate;
            for centre in &mut self.centres {
                centre.update(sample.input(), &errors, rate)?;
            }
            for (b, e) in self.bias.iter_mut().zip(&errors) {
                *b += rate * e;
            }
        }
        let error = 0.5 * sum_squared;
        self.train_errors.push(error);
        Ok(error)
    }

    /// One pass over `data` without touching any parameter. Returns half the
    /// summed squared error and appends it to the test trace.
    pub fn evaluate_epoch(&mut self, data: &[Data]) -> Result<f64, RbfError> {
        let mut sum_squared = 0.;
        for sample in data {
            let actual = self.forward(sample.input())?;
            if sample.target().len() != self.output_dim {
                return Err(RbfError::DimensionMismatch {
                    expected: self.output_dim,
                    found: sample.target().len(),
                });
            }
            sum_squared += sample
                .target()
                .iter()
                .zip(&actual)
                .map(|(t, a)| (t - a) * (t - a))
                .sum::<f64>();
        }
        let error = 0.5 * sum_squared;
        self.test_errors.push(error);
        Ok(error)
    }

    /// Trains until `max_epochs`, each epoch passing over the training set
    /// and then the test set. A dimension mismatch or spread collapse aborts
    /// the run; entries for already-completed epochs stay in place.
    pub fn run(&mut self, train: &[Data], test: &[Data]) -> Result<(), RbfError> {
        self.run_with(train, test, &mut MockLogger)
    }

    /// As [`run`](RbfNetwork::run), reporting each completed epoch to
    /// `logger` with 1-based epoch numbers.
    pub fn run_with<L: Logger>(
        &mut self,
        train: &[Data],
        test: &[Data],
        logger: &mut L,
    ) -> Result<(), RbfError> {
        if train.is_empty() {
            return Err(RbfError::InsufficientData {
                required: 1,
                available: 0,
            });
        }
        if test.is_empty() {
            return Err(RbfError::InsufficientData {
                required: 1,
                available: 0,
            });
        }
        let start = self.epoch;
        for (offset, step) in Trainer::new(self, train, test).enumerate() {
            let (train_error, test_error) = step?;
            logger.epoch_error((start + offset + 1) as u32, train_error, test_error);
        }
        Ok(())
    }
}

/// Drives a network through its remaining epochs one at a time, yielding the
/// (train, test) error pair of each. Stops after `max_epochs` or, for good,
/// after the first failed epoch.
pub struct Trainer<'a> {
    network: &'a mut RbfNetwork,
    train: &'a [Data],
    test: &'a [Data],
    dead: bool,
}

impl<'a> Trainer<'a> {
    pub fn new(network: &'a mut RbfNetwork, train: &'a [Data], test: &'a [Data]) -> Self {
        Trainer {
            network,
            train,
            test,
            dead: false,
        }
    }

    fn step(&mut self) -> Result<(f64, f64), RbfError> {
        let train_error = self.network.train_epoch(self.train)?;
        let test_error = match self.network.evaluate_epoch(self.test) {
            Ok(error) => error,
            Err(e) => {
                // keep the two traces in step when the test pass dies mid-epoch
                self.network.train_errors.pop();
                return Err(e);
            }
        };
        self.network.epoch += 1;
        Ok((train_error, test_error))
    }
}

impl Iterator for Trainer<'_> {
    type Item = Result<(f64, f64), RbfError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.dead || self.network.epoch >= self.network.max_epochs {
            return None;
        }
        let step = self.step();
        if step.is_err() {
            self.dead = true;
        }
        Some(step)
    }
}
