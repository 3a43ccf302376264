#[macro_use]
extern crate log;
pub mod confusion;
pub mod degree;
pub mod error;
pub mod observation;
pub use confusion::{CanonicalTable, ConfusionMatrix, LabelSpace};
pub use degree::{normalize, CanonicalDegree};
pub use error::{DegreeError, Result};
pub use observation::Observation;
use std::io::{BufRead, Write};

pub const LOG_ENV: &str = "DEGREE_CONFUSION_LOG";

/// Nothing is written unless the whole input is valid.
pub fn run<R: BufRead, W: Write>(reader: R, mut wtr: W) -> Result<()> {
    let observations = observation::parse_observations(reader)?;
    let table = confusion::build_and_format(&observations)?;
    writeln!(&mut wtr, "{:?}", observation::truths(&observations))?;
    writeln!(&mut wtr, "{}", table)?;
    wtr.flush()?;
    Ok(())
}

pub fn run_indexed<R: BufRead, W: Write>(reader: R, mut wtr: W) -> Result<()> {
    let observations = observation::parse_observations(reader)?;
    let matrix = ConfusionMatrix::from_observations(&observations, LabelSpace::Truths)?;
    for (idx, label) in matrix.rows().iter().enumerate() {
        writeln!(&mut wtr, "{}\t{}", idx, label)?;
    }
    writeln!(&mut wtr, "{}", matrix.to_indexed_string())?;
    wtr.flush()?;
    Ok(())
}

pub fn run_json<R: BufRead, W: Write>(reader: R, mut wtr: W) -> Result<()> {
    let observations = observation::parse_observations(reader)?;
    let table = confusion::build_table(&observations)?;
    serde_json::ser::to_writer(&mut wtr, &table)?;
    writeln!(&mut wtr)?;
    wtr.flush()?;
    Ok(())
}
