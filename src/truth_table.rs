//! Exhaustive truth tables.
//!
//! [`generate_truth_table`] drives the simulator once for every assignment of
//! the circuit's switches and records what the bulbs show.
//!
//! # Column order
//!
//! Switches and bulbs are ordered top-to-bottom by their `y` position (ties go
//! to the smaller `x`, then the smaller id). The first switch in that order is
//! the most significant bit of the row index: for switches `A` above `B`,
//! row 2 (`0b10`) is `A = 1, B = 0`.
//!
//! # Size
//!
//! A circuit with `n` switches has `2^n` rows. Nothing here caps `n`; use
//! [`combination_count`] to decide up front whether enumeration is sensible.

use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::node::{Connection, Node};
use crate::simulation::{simulate_with_config, SimulationConfig};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TruthTableError {
    /// The circuit needs at least one switch and at least one bulb.
    NeedsInputsAndOutputs,
    /// More switches than rows can be indexed on this platform.
    TooManyInputs { inputs: usize },
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::NeedsInputsAndOutputs => {
                write!(f, "You need at least one Input (Switch) and one Output (Bulb).")
            }
            TruthTableError::TooManyInputs { inputs } => {
                write!(f, "{} inputs give more rows than can be enumerated", inputs)
            }
        }
    }
}

impl std::error::Error for TruthTableError {}

/// One assignment of the switches and the resulting bulb readings, as 0/1.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTableRow {
    pub inputs: Vec<u8>,
    pub outputs: Vec<u8>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    /// Switches, in column order.
    pub inputs: Vec<Node>,
    /// Bulbs, in column order.
    pub outputs: Vec<Node>,
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&TruthTableRow> {
        self.rows.get(index)
    }

    /// Readings of the `index`-th bulb across all rows, or `None` if some row
    /// has no such reading.
    pub fn output_column(&self, index: usize) -> Option<Vec<u8>> {
        if index >= self.outputs.len() {
            return None;
        }
        self.rows.iter().map(|row| row.outputs.get(index).copied()).collect()
    }
}

/// Exact number of rows for `num_inputs` switches.
pub fn combination_count(num_inputs: usize) -> BigUint {
    BigUint::from(1u32) << num_inputs
}

/// Simulates every assignment of the switches in `nodes`.
///
/// Rows are produced one at a time and nothing is reserved up front, so a
/// large `n` costs time and memory in proportion to the rows actually built.
/// Check [`combination_count`] first when `n` is not known to be small.
pub fn generate_truth_table(nodes: &[Node], connections: &[Connection]) -> Result<TruthTable, TruthTableError> {
    generate_truth_table_with_config(nodes, connections, &SimulationConfig::default())
}

pub fn generate_truth_table_with_config(
    nodes: &[Node],
    connections: &[Connection],
    config: &SimulationConfig,
) -> Result<TruthTable, TruthTableError> {
    let mut inputs: Vec<&Node> = nodes.iter().filter(|n| n.kind.is_input()).collect();
    let mut outputs: Vec<&Node> = nodes.iter().filter(|n| n.kind.is_output()).collect();

    if inputs.is_empty() || outputs.is_empty() {
        return Err(TruthTableError::NeedsInputsAndOutputs);
    }

    inputs.sort_by_key(|n| n.position_key());
    outputs.sort_by_key(|n| n.position_key());

    let n = inputs.len();
    let num_rows = u32::try_from(n)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .ok_or(TruthTableError::TooManyInputs { inputs: n })?;
    debug!(
        "generate_truth_table(inputs = {}, outputs = {}, rows = {})",
        n,
        outputs.len(),
        num_rows
    );

    // Position of each node in `inputs`, for overwriting states in the working copy.
    let column: Vec<Option<usize>> = nodes
        .iter()
        .map(|node| inputs.iter().position(|inp| inp.id == node.id))
        .collect();

    let mut working: Vec<Node> = nodes.to_vec();
    let mut rows = Vec::new();

    for combo in 0..num_rows {
        let bits: Vec<u8> = (0..n).map(|idx| ((combo >> (n - 1 - idx)) & 1) as u8).collect();

        for (node, col) in working.iter_mut().zip(&column) {
            if let Some(idx) = col {
                node.state = Some(bits[*idx] == 1);
            }
        }

        let values = simulate_with_config(&working, connections, config);
        let readings = outputs
            .iter()
            .map(|out| values.get(&out.id).copied().unwrap_or(false) as u8)
            .collect();

        rows.push(TruthTableRow {
            inputs: bits,
            outputs: readings,
        });
    }

    Ok(TruthTable {
        inputs: inputs.into_iter().cloned().collect(),
        outputs: outputs.into_iter().cloned().collect(),
        rows,
    })
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self
            .inputs
            .iter()
            .chain(self.outputs.iter())
            .map(|n| n.label.as_str())
            .collect();
        let widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(1)).collect();
        let split = self.inputs.len();

        let write_line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
                if i == split {
                    write!(f, " |")?;
                }
                write!(f, " {:^width$}", cell, width = width)?;
            }
            writeln!(f)
        };

        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        write_line(f, &header_cells)?;

        let rule_len = widths.iter().map(|w| w + 1).sum::<usize>() + 2;
        writeln!(f, "{}", "-".repeat(rule_len))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .inputs
                .iter()
                .chain(row.outputs.iter())
                .map(|b| b.to_string())
                .collect();
            write_line(f, &cells)?;
        }
        Ok(())
    }
}
