use crate::nearest_neighbours::Neighbour;
use ndarray::Array1;
use std::io::{self, Write};

/// One `Value <distance> Class <label>` line per neighbour.
pub fn write_neighbours<W: Write>(out: &mut W, neighbours: &[Neighbour]) -> io::Result<()> {
    for neighbour in neighbours {
        writeln!(
            out,
            "Value {:?} Class {}",
            neighbour.distance, neighbour.label
        )?;
    }

    Ok(())
}

/// The weight vector as a single bracketed list.
pub fn write_weights<W: Write>(out: &mut W, weights: &Array1<f64>) -> io::Result<()> {
    writeln!(out, "{:?}", weights.to_vec())
}
