use std::convert::TryFrom;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::centre::Centre;
use crate::initializer::{Initializer, UniformInit};
use crate::RbfError;

/// Configures and validates a network before any parameter is drawn.
#[derive(Clone, Debug)]
pub struct NetworkBuilder {
    hidden: usize,
    inputs: usize,
    outputs: usize,
    learning_rate: f64,
    spread: f64,
    epochs: usize,
    centres: Vec<Vec<f64>>,
    seed: u64,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        NetworkBuilder {
            hidden: 0,
            inputs: 0,
            outputs: 1,
            learning_rate: 0.01,
            spread: 1.,
            epochs: 1,
            centres: Vec::new(),
            seed: 0,
        }
    }

    /// Number of hidden units.
    pub fn hidden(mut self, hidden: usize) -> Self {
        self.hidden = hidden;
        self
    }
    /// Input dimension.
    pub fn inputs(mut self, inputs: usize) -> Self {
        self.inputs = inputs;
        self
    }
    /// Number of output neurons.
    pub fn outputs(mut self, outputs: usize) -> Self {
        self.outputs = outputs;
        self
    }
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
    /// Initial spread shared by all centres.
    pub fn spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }
    /// Initial centre positions. At least `hidden` vectors of length
    /// `inputs`; only the first `hidden` are used.
    pub fn centres(mut self, centres: Vec<Vec<f64>>) -> Self {
        self.centres = centres;
        self
    }
    /// Seed for the default uniform initializer.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), RbfError> {
        if self.hidden == 0 {
            return Err(RbfError::Config {
                param: "hidden",
                value: 0.,
            });
        }
        if self.inputs == 0 {
            return Err(RbfError::Config {
                param: "inputs",
                value: 0.,
            });
        }
        if self.outputs == 0 {
            return Err(RbfError::Config {
                param: "outputs",
                value: 0.,
            });
        }
        if self.epochs == 0 {
            return Err(RbfError::Config {
                param: "epochs",
                value: 0.,
            });
        }
        if self.learning_rate <= 0. {
            return Err(RbfError::Config {
                param: "learning_rate",
                value: self.learning_rate,
            });
        }
        if self.spread <= 0. {
            return Err(RbfError::Config {
                param: "spread",
                value: self.spread,
            });
        }
        if self.centres.len() < self.hidden {
            return Err(RbfError::InsufficientData {
                required: self.hidden,
                available: self.centres.len(),
            });
        }
        for centre in &self.centres {
            if centre.len() != self.inputs {
                return Err(RbfError::DimensionMismatch {
                    expected: self.inputs,
                    found: centre.len(),
                });
            }
        }
        Ok(())
    }

    /// Builds the network with the default uniform [-1, 1] initializer.
    pub fn build(self) -> Result<RbfNetwork, RbfError> {
        let seed = self.seed;
        self.build_with(UniformInit::seeded(seed))
    }

    /// Builds the network drawing the bias first, then each centre's
    /// weights in centre order, from `init`.
    pub fn build_with<I: Initializer>(self, mut init: I) -> Result<RbfNetwork, RbfError> {
        self.validate()?;
        let bias = (0..self.outputs).map(|_| init.get()).collect();
        let spread = self.spread;
        let outputs = self.outputs;
        let centres = self
            .centres
            .into_iter()
            .take(self.hidden)
            .map(|coordinates| Centre::new(coordinates, spread, outputs, &mut init))
            .collect();

        Ok(RbfNetwork {
            bias,
            centres,
            input_dim: self.inputs,
            output_dim: outputs,
            learning_rate: self.learning_rate,
            max_epochs: self.epochs,
            epoch: 0,
            train_errors: Vec::new(),
            test_errors: Vec::new(),
        })
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A trained or trainable RBF network: an ordered set of Gaussian centres
/// feeding a linear output layer with a bias. Supports prediction and can be
/// both saved to and loaded from a file.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "NetworkUnvalidated", try_from = "NetworkUnvalidated")]
pub struct RbfNetwork {
    pub(crate) bias: Vec<f64>,
    pub(crate) centres: Vec<Centre>,
    pub(crate) input_dim: usize,
    pub(crate) output_dim: usize,
    pub(crate) learning_rate: f64,
    pub(crate) max_epochs: usize,
    pub(crate) epoch: usize,
    pub(crate) train_errors: Vec<f64>,
    pub(crate) test_errors: Vec<f64>,
}

impl RbfNetwork {
    pub fn from_file(path: &str) -> anyhow::Result<RbfNetwork> {
        let s = fs::read_to_string(path)?;
        let network: RbfNetwork = serde_json::from_str(&s)?;
        Ok(network)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        fs::write(path, serde_json::to_string(&self)?)?;
        Ok(())
    }

    /// Network response to a single pattern: for each output, the bias plus
    /// the weighted activations of every centre. Mutable because each centre
    /// caches its activation for a following update step.
    pub fn forward(&mut self, pattern: &[f64]) -> Result<Vec<f64>, RbfError> {
        if pattern.len() != self.input_dim {
            return Err(RbfError::DimensionMismatch {
                expected: self.input_dim,
                found: pattern.len(),
            });
        }
        let mut output = self.bias.clone();
        for centre in &mut self.centres {
            let activation = centre.activate(pattern)?;
            for (out, w) in output.iter_mut().zip(centre.weights()) {
                *out += w * activation;
            }
        }
        Ok(output)
    }

    /// The trained parameters of the output layer: row 0 is the bias, row
    /// `o + 1` holds every centre's weight towards output `o`, in centre
    /// order.
    pub fn weight_matrix(&self) -> Vec<Vec<f64>> {
        let mut rows = Vec::with_capacity(1 + self.output_dim);
        rows.push(self.bias.clone());
        for o in 0..self.output_dim {
            rows.push(self.centres.iter().map(|c| c.weights()[o]).collect());
        }
        rows
    }

    //getters
    pub fn bias(&self) -> &[f64] {
        &self.bias
    }
    pub fn centres(&self) -> &[Centre] {
        &self.centres
    }
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }
    /// Number of epochs completed so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }
    /// Half the summed squared error over the training set, one entry per
    /// completed epoch.
    pub fn train_errors(&self) -> &[f64] {
        &self.train_errors
    }
    /// As [`train_errors`](RbfNetwork::train_errors), over the test set.
    pub fn test_errors(&self) -> &[f64] {
        &self.test_errors
    }
}

/// When deserializing, we first construct this object, validate that its
/// structure is consistent and convert to RbfNetwork.
#[derive(Serialize, Deserialize)]
struct NetworkUnvalidated {
    bias: Vec<f64>,
    centres: Vec<Centre>,
    input_dim: usize,
    output_dim: usize,
    learning_rate: f64,
    max_epochs: usize,
    epoch: usize,
    train_errors: Vec<f64>,
    test_errors: Vec<f64>,
}

impl Into<NetworkUnvalidated> for RbfNetwork {
    fn into(self) -> NetworkUnvalidated {
        NetworkUnvalidated {
            bias: self.bias,
            centres: self.centres,
            input_dim: self.input_dim,
            output_dim: self.output_dim,
            learning_rate: self.learning_rate,
            max_epochs: self.max_epochs,
            epoch: self.epoch,
            train_errors: self.train_errors,
            test_errors: self.test_errors,
        }
    }
}

impl TryFrom<NetworkUnvalidated> for RbfNetwork {
    type Error = RbfError;
    fn try_from(value: NetworkUnvalidated) -> Result<Self, Self::Error> {
        if value.learning_rate <= 0. {
            return Err(RbfError::Config {
                param: "learning_rate",
                value: value.learning_rate,
            });
        }
        if value.max_epochs == 0 {
            return Err(RbfError::Config {
                param: "epochs",
                value: 0.,
            });
        }
        if value.bias.len() != value.output_dim {
            return Err(RbfError::DimensionMismatch {
                expected: value.output_dim,
                found: value.bias.len(),
            });
        }
        for centre in &value.centres {
            if centre.coordinates().len() != value.input_dim {
                return Err(RbfError::DimensionMismatch {
                    expected: value.input_dim,
                    found: centre.coordinates().len(),
                });
            }
            if centre.weights().len() != value.output_dim {
                return Err(RbfError::DimensionMismatch {
                    expected: value.output_dim,
                    found: centre.weights().len(),
                });
            }
            if centre.spread() <= 0. {
                return Err(RbfError::Config {
                    param: "spread",
                    value: centre.spread(),
                });
            }
        }

        Ok(RbfNetwork {
            bias: value.bias,
            centres: value.centres,
            input_dim: value.input_dim,
            output_dim: value.output_dim,
            learning_rate: value.learning_rate,
            max_epochs: value.max_epochs,
            epoch: value.epoch,
            train_errors: value.train_errors,
            test_errors: value.test_errors,
        })
    }
}
