use crate::degree::CanonicalDegree;
use crate::error::{DegreeError, Result};
use crate::observation::Observation;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

pub const MISSING: &str = "NaN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSpace {
    // Rows are truths, columns are truths and predicted degrees.
    Observed,
    // Truths on both axes. Predictions of a degree never seen as a truth are not counted.
    Truths,
}

// counts[i][j]: truth is rows[i], prediction is columns[j].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn from_observations(observations: &[Observation], space: LabelSpace) -> Result<Self> {
        let truths: BTreeSet<&str> = observations.iter().map(|obs| obs.truth.as_str()).collect();
        let mut columns = truths.clone();
        if space == LabelSpace::Observed {
            columns.extend(observations.iter().map(|obs| obs.prediction.as_str()));
        }
        let rows: Vec<String> = truths.into_iter().map(|label| label.to_string()).collect();
        let columns: Vec<String> = columns.into_iter().map(|label| label.to_string()).collect();
        debug!("Rows:{:?} Columns:{:?}", rows, columns);
        Self::with_labels(observations, rows, columns)
    }
    pub(crate) fn with_labels(
        observations: &[Observation],
        rows: Vec<String>,
        columns: Vec<String>,
    ) -> Result<Self> {
        for labels in &[&rows, &columns] {
            let distinct: BTreeSet<_> = labels.iter().collect();
            if distinct.len() != labels.len() {
                return Err(DegreeError::Computation(format!(
                    "{} labels supplied but only {} are distinct",
                    labels.len(),
                    distinct.len()
                )));
            }
        }
        let row_index = index_of(&rows);
        let column_index = index_of(&columns);
        let mut counts = vec![vec![0; columns.len()]; rows.len()];
        let mut dropped = 0;
        for obs in observations {
            let row = row_index.get(obs.truth.as_str());
            let column = column_index.get(obs.prediction.as_str());
            match (row, column) {
                (Some(&i), Some(&j)) => counts[i][j] += 1,
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!("{} observations fall outside the label set and are not counted", dropped);
        }
        Ok(ConfusionMatrix {
            rows,
            columns,
            counts,
        })
    }
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }
    pub fn to_indexed_string(&self) -> String {
        let header: Vec<_> = (0..self.columns.len()).map(|n| n.to_string()).collect();
        let mut lines = vec![format!("   {}", header.join("  "))];
        for (rownum, row) in self.counts.iter().enumerate() {
            let row: Vec<_> = row.iter().map(|count| count.to_string()).collect();
            lines.push(format!("{}  {}", rownum, row.join("  ")));
        }
        lines.join("\n")
    }
    pub fn reindex(&self) -> CanonicalTable {
        let rows = canonical_positions(&self.rows);
        let columns = canonical_positions(&self.columns);
        let counts = rows
            .iter()
            .map(|&row| {
                columns
                    .iter()
                    .map(|&column| Some(self.counts[row?][column?]))
                    .collect()
            })
            .collect();
        CanonicalTable {
            labels: CanonicalDegree::ALL.to_vec(),
            counts,
        }
    }
}

fn index_of(labels: &[String]) -> HashMap<&str, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.as_str(), idx))
        .collect()
}

fn canonical_positions(labels: &[String]) -> Vec<Option<usize>> {
    CanonicalDegree::ALL
        .iter()
        .map(|degree| labels.iter().position(|label| label == degree.as_str()))
        .collect()
}

// `None` marks a degree absent from the matrix the table was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalTable {
    labels: Vec<CanonicalDegree>,
    counts: Vec<Vec<Option<usize>>>,
}

impl CanonicalTable {
    pub fn get(&self, truth: CanonicalDegree, prediction: CanonicalDegree) -> Option<usize> {
        self.counts[truth.index()][prediction.index()]
    }
    pub fn labels(&self) -> &[CanonicalDegree] {
        &self.labels
    }
}

impl std::fmt::Display for CanonicalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cells: Vec<Vec<String>> = self
            .counts
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(count) => count.to_string(),
                        None => MISSING.to_string(),
                    })
                    .collect()
            })
            .collect();
        let row_width = self.labels.iter().map(|l| l.as_str().len()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .labels
            .iter()
            .enumerate()
            .map(|(j, label)| {
                cells
                    .iter()
                    .map(|row| row[j].len())
                    .fold(label.as_str().len(), |x, y| x.max(y))
            })
            .collect();
        write!(f, "{:<w$}", "", w = row_width)?;
        for (label, w) in self.labels.iter().zip(widths.iter()) {
            write!(f, "  {:>w$}", label.as_str(), w = w)?;
        }
        for (label, row) in self.labels.iter().zip(cells.iter()) {
            writeln!(f)?;
            write!(f, "{:<w$}", label.as_str(), w = row_width)?;
            for (cell, w) in row.iter().zip(widths.iter()) {
                write!(f, "  {:>w$}", cell, w = w)?;
            }
        }
        Ok(())
    }
}

// Every truth label has to be a degree name to be placed on the canonical axes.
pub fn check_truths(observations: &[Observation]) -> Result<()> {
    let unknown: BTreeSet<&str> = observations
        .iter()
        .map(|obs| obs.truth.as_str())
        .filter(|truth| truth.parse::<CanonicalDegree>().is_err())
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(DegreeError::Computation(format!(
            "truth labels {:?} are not degrees of relatedness",
            unknown
        )))
    }
}

pub fn build_table(observations: &[Observation]) -> Result<CanonicalTable> {
    check_truths(observations)?;
    Ok(ConfusionMatrix::from_observations(observations, LabelSpace::Observed)?.reindex())
}

pub fn build_and_format(observations: &[Observation]) -> Result<String> {
    Ok(build_table(observations)?.to_string())
}
