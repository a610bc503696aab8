//! File collaborators around the network core: the run description file,
//! the CSV centre/train/test files, and the trained-weight dump.

use std::fs;
use std::path::Path;

use anyhow::bail;

use crate::trainer::Data;

/// Hyperparameters and file paths for one training run, as listed in a
/// description file of `name value` lines:
///
/// ```text
/// hidden 4
/// inputs 2
/// outputs 1
/// learning_rate 0.01
/// spread 1.0
/// epochs 500
/// centres_file centreVectors.csv
/// train_file training.csv
/// test_file test.csv
/// ```
#[derive(Clone, Debug)]
pub struct RunDescription {
    pub hidden: usize,
    pub inputs: usize,
    pub outputs: usize,
    pub learning_rate: f64,
    pub spread: f64,
    pub epochs: usize,
    pub centres_file: String,
    pub train_file: String,
    pub test_file: String,
}

pub fn read_description<P: AsRef<Path>>(path: P) -> anyhow::Result<RunDescription> {
    parse_description(&fs::read_to_string(path)?)
}

fn parse_description(text: &str) -> anyhow::Result<RunDescription> {
    let mut values = Vec::with_capacity(9);
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_whitespace().nth(1) {
            Some(value) => values.push(value.to_owned()),
            None => bail!("description line {:?} has no value", line),
        }
    }
    if values.len() != 9 {
        bail!("expected 9 description entries, found {}", values.len());
    }
    let mut paths = values.split_off(6);
    Ok(RunDescription {
        hidden: values[0].parse()?,
        inputs: values[1].parse()?,
        outputs: values[2].parse()?,
        learning_rate: values[3].parse()?,
        spread: values[4].parse()?,
        epochs: values[5].parse()?,
        test_file: paths.pop().unwrap(),
        train_file: paths.pop().unwrap(),
        centres_file: paths.pop().unwrap(),
    })
}

/// Reads initial centre positions, one comma-separated vector of `inputs`
/// coordinates per line.
pub fn read_centres<P: AsRef<Path>>(path: P, inputs: usize) -> anyhow::Result<Vec<Vec<f64>>> {
    parse_centres(&fs::read_to_string(path)?, inputs)
}

fn parse_centres(text: &str, inputs: usize) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut centres = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let centre = parse_row(line)?;
        if centre.len() != inputs {
            bail!(
                "line {} has {} fields, expected {}",
                number + 1,
                centre.len(),
                inputs
            );
        }
        centres.push(centre);
    }
    Ok(centres)
}

/// Reads a dataset. Each line is `label,targets..,inputs..`; the leading
/// label identifies the sample in the source data and takes no part in
/// training. Pairs are returned in file order.
pub fn read_data<P: AsRef<Path>>(
    path: P,
    inputs: usize,
    outputs: usize,
) -> anyhow::Result<Vec<Data>> {
    parse_data(&fs::read_to_string(path)?, inputs, outputs)
}

fn parse_data(text: &str, inputs: usize, outputs: usize) -> anyhow::Result<Vec<Data>> {
    let mut data = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 1 + outputs + inputs {
            bail!(
                "line {} has {} fields, expected {}",
                number + 1,
                fields.len(),
                1 + outputs + inputs
            );
        }
        let values = fields[1..]
            .iter()
            .map(|field| Ok(field.trim().parse::<f64>()?))
            .collect::<anyhow::Result<Vec<f64>>>()?;
        data.push(Data::new(values[outputs..].to_vec(), values[..outputs].to_vec()));
    }
    Ok(data)
}

fn parse_row(line: &str) -> anyhow::Result<Vec<f64>> {
    line.split(',')
        .map(|field| Ok(field.trim().parse::<f64>()?))
        .collect()
}

/// Writes the weight matrix, one comma-separated row per line.
pub fn write_weights<P: AsRef<Path>>(path: P, weights: &[Vec<f64>]) -> anyhow::Result<()> {
    fs::write(path, render_weights(weights))?;
    Ok(())
}

fn render_weights(weights: &[Vec<f64>]) -> String {
    let mut text = String::new();
    for row in weights {
        let fields: Vec<String> = row.iter().map(|w| w.to_string()).collect();
        text.push_str(&fields.join(","));
        text.push('\n');
    }
    text
}
