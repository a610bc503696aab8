mod common;

use rbf_nn::initializer::WeightInit;
use rbf_nn::network::NetworkBuilder;
use rbf_nn::trainer::Data;
use rbf_nn::RbfError;

fn builder() -> NetworkBuilder {
    NetworkBuilder::new()
        .hidden(1)
        .inputs(1)
        .outputs(1)
        .learning_rate(0.1)
        .spread(1.)
        .epochs(5)
        .centres(vec![vec![0.]])
}

#[test]
fn rejects_zero_hidden_units() {
    assert!(matches!(
        builder().hidden(0).build(),
        Err(RbfError::Config { .. })
    ));
}

#[test]
fn rejects_non_positive_learning_rate() {
    assert!(matches!(
        builder().learning_rate(-0.5).build(),
        Err(RbfError::Config { .. })
    ));
}

#[test]
fn rejects_non_positive_spread() {
    assert!(matches!(
        builder().spread(0.).build(),
        Err(RbfError::Config { .. })
    ));
}

#[test]
fn rejects_missing_centre_vectors() {
    assert!(matches!(
        builder().hidden(2).build(),
        Err(RbfError::InsufficientData {
            required: 2,
            available: 1,
        })
    ));
}

#[test]
fn rejects_centre_of_wrong_dimension() {
    assert!(matches!(
        builder().centres(vec![vec![0., 1.]]).build(),
        Err(RbfError::DimensionMismatch { .. })
    ));
}

#[test]
fn rejects_empty_datasets() {
    let mut network = builder().build().unwrap();
    let data = common::constant_data(0., 0.5);
    assert!(matches!(
        network.run(&[], &data),
        Err(RbfError::InsufficientData { .. })
    ));
    assert!(matches!(
        network.run(&data, &[]),
        Err(RbfError::InsufficientData { .. })
    ));
    assert!(network.train_errors().is_empty());
}

#[test]
fn mismatched_pattern_aborts_and_leaves_traces_unchanged() {
    let mut network = common::single_unit_network(0., 0.5, 0.05, 10);
    let bad = vec![Data::new([0.], [0.5]), Data::new([0., 1.], [0.5])];
    let good = common::constant_data(0., 0.5);

    let result = network.run(&bad, &good);
    assert!(matches!(result, Err(RbfError::DimensionMismatch { .. })));
    assert!(network.train_errors().is_empty());
    assert!(network.test_errors().is_empty());
    assert_eq!(network.epoch(), 0);
}

#[test]
fn mismatched_target_is_rejected() {
    let mut network = common::single_unit_network(0., 0.5, 0.05, 10);
    let data = vec![Data::new([0.], [0.5, 1.])];
    assert!(matches!(
        network.train_epoch(&data),
        Err(RbfError::DimensionMismatch { .. })
    ));
    assert!(network.train_errors().is_empty());
}

#[test]
fn spread_collapse_aborts_the_run() {
    // An aggressive rate on a narrow centre drives the spread through zero
    // on the very first pattern.
    let mut network = NetworkBuilder::new()
        .hidden(1)
        .inputs(1)
        .outputs(1)
        .learning_rate(10.)
        .spread(0.1)
        .epochs(5)
        .centres(vec![vec![0.]])
        .build_with(WeightInit::new(vec![0., 1.]))
        .unwrap();
    let data = vec![Data::new([0.1], [-5.])];

    let result = network.run(&data, &data);
    assert!(matches!(result, Err(RbfError::SpreadCollapsed { .. })));
    assert!(network.train_errors().is_empty());
}
