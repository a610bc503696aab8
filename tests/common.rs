use rbf_nn::initializer::WeightInit;
use rbf_nn::network::{NetworkBuilder, RbfNetwork};
use rbf_nn::trainer::Data;

/// One centre at the origin, 1-in 1-out, spread 1. The initializer fills
/// the bias first, then the centre's weight.
pub fn single_unit_network(bias: f64, weight: f64, learning_rate: f64, epochs: usize) -> RbfNetwork {
    NetworkBuilder::new()
        .hidden(1)
        .inputs(1)
        .outputs(1)
        .learning_rate(learning_rate)
        .spread(1.)
        .epochs(epochs)
        .centres(vec![vec![0.]])
        .build_with(WeightInit::new(vec![bias, weight]))
        .unwrap()
}

pub fn constant_data(input: f64, target: f64) -> Vec<Data> {
    vec![Data::new([input], [target])]
}
