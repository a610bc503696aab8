use rbf_nn::initializer::XavierInit;
use rbf_nn::network::NetworkBuilder;
use rbf_nn::trainer::{Data, Trainer};

fn main() -> anyhow::Result<()> {
    // one period of a sine, sampled at 0.1 intervals
    let data: Vec<Data> = (0..63)
        .map(|i| i as f64 / 10. - 3.1)
        .map(|x| Data::new([x], [x.sin()]))
        .collect();
    let centres: Vec<Vec<f64>> = (0..7).map(|i| vec![i as f64 - 3.]).collect();

    let mut network = NetworkBuilder::new()
        .hidden(7)
        .inputs(1)
        .outputs(1)
        .learning_rate(0.01)
        .spread(1.)
        .epochs(2000)
        .centres(centres)
        .build_with(XavierInit::new(7))?;

    for (epoch, step) in Trainer::new(&mut network, &data, &data).enumerate() {
        let (train_error, test_error) = step?;
        if (epoch + 1) % 200 == 0 {
            println!(
                "epoch {:4}: train {:.6} test {:.6}",
                epoch + 1,
                train_error,
                test_error
            );
        }
    }

    println!("fitted spreads:");
    for centre in network.centres() {
        println!("  centre {:?} spread {:.4}", centre.coordinates(), centre.spread());
    }
    Ok(())
}
