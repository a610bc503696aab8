use rbf_nn::network::{NetworkBuilder, RbfNetwork};
use rbf_nn::trainer::Data;

fn fitted_network() -> anyhow::Result<RbfNetwork> {
    let mut network = NetworkBuilder::new()
        .hidden(3)
        .inputs(2)
        .outputs(2)
        .learning_rate(0.001)
        .spread(1.)
        .epochs(5)
        .centres(vec![vec![0., 0.], vec![1., 0.], vec![0., 1.]])
        .seed(7)
        .build()?;
    let train = vec![
        Data::new([0.2, 0.4], [0.1, 0.3]),
        Data::new([0.9, 0.1], [0.4, 0.2]),
    ];
    let test = vec![Data::new([0.5, 0.5], [0.2, 0.2])];
    network.run(&train, &test)?;
    Ok(network)
}

#[test]
fn save_and_load() -> anyhow::Result<()> {
    let mut network = fitted_network()?;
    let ser = serde_json::to_string(&network)?;
    let mut loaded: RbfNetwork = serde_json::from_str(&ser)?;

    let input = [0.3, 0.7];
    let correct = network.forward(&input)?;
    let prediction = loaded.forward(&input)?;
    assert_eq!(
        correct, prediction,
        "Network structure damaged during saving."
    );
    assert_eq!(network.train_errors(), loaded.train_errors());
    assert_eq!(network.epoch(), loaded.epoch());
    Ok(())
}

#[test]
fn inconsistent_json_is_rejected() -> anyhow::Result<()> {
    let network = fitted_network()?;
    let mut value = serde_json::to_value(&network)?;
    value["output_dim"] = serde_json::json!(5);
    assert!(serde_json::from_value::<RbfNetwork>(value).is_err());
    Ok(())
}
