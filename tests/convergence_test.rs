mod common;

use rbf_nn::network::NetworkBuilder;
use rbf_nn::trainer::Data;

#[test]
fn single_pattern_convergence() {
    // The pattern sits on the centre, so the activation is pinned at 1 and
    // only the weight and bias move: the per-epoch error must shrink by a
    // constant factor.
    let mut network = common::single_unit_network(-0.25, 0.25, 0.05, 200);
    let data = common::constant_data(0., 0.5);
    network.run(&data, &data).unwrap();

    let train = network.train_errors();
    assert_eq!(train.len(), 200);
    assert_eq!(network.test_errors().len(), 200);
    for pair in train.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-12,
            "error rose between epochs: {:?}",
            pair
        );
    }
    let last = *train.last().unwrap();
    assert!(last < 1e-9, "Failed to converge, error was {}", last);

    let prediction = network.forward(&[0.]).unwrap();
    assert!((prediction[0] - 0.5).abs() < 1e-4);
}

#[test]
fn traces_and_weight_matrix_have_the_documented_shape() {
    let mut network = NetworkBuilder::new()
        .hidden(3)
        .inputs(2)
        .outputs(2)
        .learning_rate(0.001)
        .spread(1.)
        .epochs(5)
        .centres(vec![vec![0., 0.], vec![1., 0.], vec![0., 1.]])
        .seed(7)
        .build()
        .unwrap();
    let train = vec![
        Data::new([0.2, 0.4], [0.1, 0.3]),
        Data::new([0.9, 0.1], [0.4, 0.2]),
    ];
    let test = vec![Data::new([0.5, 0.5], [0.2, 0.2])];
    network.run(&train, &test).unwrap();

    assert_eq!(network.train_errors().len(), 5);
    assert_eq!(network.test_errors().len(), 5);

    let matrix = network.weight_matrix();
    assert_eq!(matrix.len(), 3, "one bias row plus one row per output");
    assert_eq!(matrix[0].len(), 2);
    assert!(matrix[1..].iter().all(|row| row.len() == 3));
}

#[test]
fn run_is_terminal() {
    let mut network = common::single_unit_network(0., 0.5, 0.05, 10);
    let data = common::constant_data(0., 0.5);
    network.run(&data, &data).unwrap();
    assert_eq!(network.epoch(), 10);

    // a second run has no epochs left and must not grow the traces
    network.run(&data, &data).unwrap();
    assert_eq!(network.train_errors().len(), 10);
    assert_eq!(network.test_errors().len(), 10);
}
