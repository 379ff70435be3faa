use approx::assert_relative_eq;
use ndarray::{arr1, array, Array1, Array2};
use neighbours::logistic_regression::{hypothesis, with_bias};
use neighbours::parse::load_matrix;
use neighbours::pipeline::{run_logistic_regression, run_nearest_neighbours};
use neighbours::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const QUERY: [i64; 3] = [4, 3, 2];
const NEIGHBOURS: usize = 5;
const LEARNING_RATE: f64 = 0.01;
const EPOCHS: usize = 10;

fn write_matrix(dir: &Path, name: &str, matrix: &Array2<i64>) -> PathBuf {
    let mut text = String::new();
    for row in matrix.rows() {
        let tokens: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(text, "{}", tokens.join(" ")).unwrap();
    }

    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn shipped(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

#[test]
fn loader_round_trip() {
    let dir = TempDir::new().unwrap();
    let matrix = array![[4, 3, 2], [-10, 0, 7], [123_456, 1, 1]];
    let path = write_matrix(dir.path(), "matrix.txt", &matrix);

    assert_eq!(load_matrix(&path).unwrap(), matrix);
}

#[test]
fn nearest_neighbours_reports_exact_match_first() {
    let dir = TempDir::new().unwrap();
    let input = write_matrix(dir.path(), "input.txt", &array![[1, 1, 1], [4, 3, 2], [9, 9, 9]]);
    let labels = write_matrix(dir.path(), "labels.txt", &array![[0], [1], [0]]);
    let mut out = Vec::new();

    let neighbours =
        run_nearest_neighbours(&input, &labels, arr1(&QUERY).view(), 3, &mut out).unwrap();

    assert_eq!(neighbours[0].index, 1);
    assert_eq!(neighbours[0].label, 1);
    assert_eq!(
        String::from_utf8(out).unwrap().lines().next(),
        Some("Value 0.0 Class 1")
    );
}

#[test]
fn nearest_neighbours_on_shipped_data() {
    let mut out = Vec::new();

    run_nearest_neighbours(
        shipped("input_hw7.txt"),
        shipped("class_label_hw7.txt"),
        arr1(&QUERY).view(),
        NEIGHBOURS,
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Value 0.0 Class 1\n\
         Value 1.4142135623730951 Class 1\n\
         Value 1.4142135623730951 Class 0\n\
         Value 1.4142135623730951 Class 1\n\
         Value 1.4142135623730951 Class 0\n"
    );
}

#[test]
fn nearest_neighbours_needs_five_samples() {
    let dir = TempDir::new().unwrap();
    let input = write_matrix(dir.path(), "input.txt", &array![[1, 1, 1], [4, 3, 2]]);
    let labels = write_matrix(dir.path(), "labels.txt", &array![[0], [1]]);

    let err = run_nearest_neighbours(
        &input,
        &labels,
        arr1(&QUERY).view(),
        NEIGHBOURS,
        &mut Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::NotEnoughSamples { .. }));
}

#[test]
fn missing_input_fails_fast() {
    let dir = TempDir::new().unwrap();
    let labels = write_matrix(dir.path(), "labels.txt", &array![[0]]);
    let mut out = Vec::new();

    let err = run_logistic_regression(
        dir.path().join("missing.txt"),
        &labels,
        LEARNING_RATE,
        EPOCHS,
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(out.is_empty());
}

#[test]
fn logistic_regression_on_shipped_data() {
    let mut first_out = Vec::new();
    let mut second_out = Vec::new();

    let first = run_logistic_regression(
        shipped("input_hw7.txt"),
        shipped("class_label_hw7.txt"),
        LEARNING_RATE,
        EPOCHS,
        &mut first_out,
    )
    .unwrap();
    let second = run_logistic_regression(
        shipped("input_hw7.txt"),
        shipped("class_label_hw7.txt"),
        LEARNING_RATE,
        EPOCHS,
        &mut second_out,
    )
    .unwrap();

    assert_eq!(
        first.to_vec(),
        vec![
            0.994_738_594_457_517_2,
            0.994_727_609_154_686_2,
            0.992_974_566_876_278_8,
            0.996_480_580_430_027_9
        ]
    );
    assert_eq!(first, second);
    assert_eq!(first_out, second_out);
    assert_eq!(
        String::from_utf8(first_out).unwrap(),
        "[0.9947385944575172, 0.9947276091546862, 0.9929745668762788, 0.9964805804300279]\n"
    );
}

#[test]
fn logistic_regression_overflow_ends_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_matrix(dir.path(), "input.txt", &array![[1, 1, 1], [-300, -300, -300]]);
    let labels = write_matrix(dir.path(), "labels.txt", &array![[0], [1]]);
    let mut out = Vec::new();

    let err =
        run_logistic_regression(&input, &labels, LEARNING_RATE, EPOCHS, &mut out).unwrap_err();

    assert!(matches!(err, Error::Overflow { .. }));
    assert!(out.is_empty());
}

#[test]
fn logistic_regression_separates_crafted_data() {
    let dir = TempDir::new().unwrap();
    let features = array![
        [3, 0, -1],
        [2, 1, -2],
        [4, -1, -1],
        [-1, -1, 0],
        [-2, 0, -1],
        [0, -2, -1]
    ];
    let input = write_matrix(dir.path(), "input.txt", &features);
    let labels = write_matrix(dir.path(), "labels.txt", &array![[1], [1], [1], [0], [0], [0]]);

    let weights =
        run_logistic_regression(&input, &labels, LEARNING_RATE, EPOCHS, &mut Vec::new()).unwrap();

    let samples = with_bias(&features);
    let initial = arr1(&[1.0; 4]);
    let positive = samples.row(0);
    let negative = samples.row(3);

    let probability = |weights: &Array1<f64>, sample| hypothesis(weights.view(), sample).unwrap();

    assert!(probability(&weights, positive) > probability(&initial, positive));
    assert!(probability(&weights, negative) < probability(&initial, negative));
    assert_relative_eq!(weights.sum(), 4.0, max_relative = 0.05);
}
