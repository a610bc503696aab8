use anyhow::bail;

use rbf_nn::dataload::{read_centres, read_data, read_description, write_weights};
use rbf_nn::network::NetworkBuilder;
use rbf_nn::trainer::LogFile;

const ERROR_FILE: &str = "errors.txt";
const WEIGHTS_FILE: &str = "weights.txt";

fn main() -> anyhow::Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("enter the path to the run description file as an argument"),
    };

    let description = read_description(&path)?;
    let centres = read_centres(&description.centres_file, description.inputs)?;
    let train = read_data(
        &description.train_file,
        description.inputs,
        description.outputs,
    )?;
    let test = read_data(
        &description.test_file,
        description.inputs,
        description.outputs,
    )?;

    let mut network = NetworkBuilder::new()
        .hidden(description.hidden)
        .inputs(description.inputs)
        .outputs(description.outputs)
        .learning_rate(description.learning_rate)
        .spread(description.spread)
        .epochs(description.epochs)
        .centres(centres)
        .build()?;

    let mut log = LogFile::new(ERROR_FILE)?;
    network.run_with(&train, &test, &mut log)?;
    write_weights(WEIGHTS_FILE, &network.weight_matrix())?;

    if let (Some(train_error), Some(test_error)) = (
        network.train_errors().last(),
        network.test_errors().last(),
    ) {
        println!(
            "Finished {} epochs: train error {}, test error {}",
            network.epoch(),
            train_error,
            test_error
        );
    }
    Ok(())
}
