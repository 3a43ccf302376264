use crate::degree::{normalize, CanonicalDegree};
use crate::error::{DegreeError, Result};
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub truth: String,
    pub prediction: CanonicalDegree,
}

impl Observation {
    pub fn new(truth: &str, prediction: CanonicalDegree) -> Self {
        Observation {
            truth: truth.to_string(),
            prediction,
        }
    }
    // <raw prediction> <truth> [ignored...]
    pub fn from_line(line_number: usize, line: &str) -> Result<Option<Self>> {
        if line.is_empty() {
            return Ok(None);
        }
        let mut tokens = line.split(' ');
        let (raw, truth) = match (tokens.next(), tokens.next()) {
            (Some(raw), Some(truth)) => (raw, truth),
            _ => {
                return Err(DegreeError::Format {
                    line_number,
                    line: line.to_string(),
                })
            }
        };
        let prediction = normalize(raw).map_err(|why| {
            error!("Line {}: {}", line_number, why);
            why
        })?;
        Ok(Some(Observation::new(truth, prediction)))
    }
}

pub fn parse_observations<R: BufRead>(reader: R) -> Result<Vec<Observation>> {
    let mut observations = vec![];
    for (idx, line) in reader.lines().enumerate() {
        if let Some(observation) = Observation::from_line(idx + 1, &line?)? {
            observations.push(observation);
        }
    }
    debug!("Parsed {} observations", observations.len());
    Ok(observations)
}

pub fn truths(observations: &[Observation]) -> Vec<&str> {
    observations.iter().map(|obs| obs.truth.as_str()).collect()
}
