use ndarray::arr1;
use neighbours::pipeline::{run_logistic_regression, run_nearest_neighbours};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    const INPUT_FILEPATH: &str = "input_hw7.txt";
    const LABELS_FILEPATH: &str = "class_label_hw7.txt";

    let stdout = io::stdout();
    let mut out = stdout.lock();

    const QUERY: [i64; 3] = [4, 3, 2];
    const NEIGHBOURS: usize = 5;

    run_nearest_neighbours(
        INPUT_FILEPATH,
        LABELS_FILEPATH,
        arr1(&QUERY).view(),
        NEIGHBOURS,
        &mut out,
    )?;

    const LEARNING_RATE: f64 = 0.01;
    const EPOCHS: usize = 10;

    run_logistic_regression(
        INPUT_FILEPATH,
        LABELS_FILEPATH,
        LEARNING_RATE,
        EPOCHS,
        &mut out,
    )?;

    Ok(())
}
