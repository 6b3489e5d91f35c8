//! Signal propagation through a circuit.
//!
//! The simulator relaxes the value of every node until nothing changes or the
//! pass budget runs out. There is no topological sort: each pass visits the
//! nodes in slice order and reads whatever values are already known, so a long
//! chain may need several passes to settle, and a combinational loop simply
//! stops wherever the budget leaves it.
//!
//! # Rules
//!
//! - Every `INPUT` node is seeded with its switch state (`false` if unset).
//! - An input port with no wire, or whose source has no value yet, reads `false`.
//! - A node's value is recomputed from its kind on every pass.
//! - The result does not say whether a fixpoint was reached.
//!
//! # Examples
//!
//! ```
//! use circuit_rs::circuit::Circuit;
//! use circuit_rs::component::ComponentKind;
//!
//! let mut circuit = Circuit::new();
//! let a = circuit.add_node(ComponentKind::Input, 100, 100);
//! let not = circuit.add_node(ComponentKind::Not, 300, 100);
//! let out = circuit.add_node(ComponentKind::Output, 500, 100);
//! circuit.connect(a, not, 0).unwrap();
//! circuit.connect(not, out, 0).unwrap();
//!
//! let values = circuit.simulate();
//! assert_eq!(values[&out], true);
//! ```

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};

use crate::node::{Connection, Node};
use crate::types::NodeId;

/// Value of every node that has been evaluated.
pub type SimulationState = BTreeMap<NodeId, bool>;

/// Configuration for [`simulate_with_config`].
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Upper bound on the number of relaxation passes (default: 50).
    pub max_iterations: usize,
}

impl SimulationConfig {
    pub const DEFAULT_MAX_ITERATIONS: usize = 50;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Simulates the circuit with the default pass budget.
pub fn simulate(nodes: &[Node], connections: &[Connection]) -> SimulationState {
    simulate_with_config(nodes, connections, &SimulationConfig::default())
}

pub fn simulate_with_config(nodes: &[Node], connections: &[Connection], config: &SimulationConfig) -> SimulationState {
    debug!(
        "simulate(nodes = {}, connections = {}, max_iterations = {})",
        nodes.len(),
        connections.len(),
        config.max_iterations
    );

    // (to, port) -> from. First wire wins if a port is claimed twice.
    let mut wiring: HashMap<(NodeId, usize), NodeId> = HashMap::with_capacity(connections.len());
    for c in connections {
        wiring.entry((c.to, c.input_index)).or_insert(c.from);
    }

    let mut values = SimulationState::new();
    for node in nodes.iter().filter(|n| n.kind.is_input()) {
        values.insert(node.id, node.state.unwrap_or(false));
    }

    let mut inputs = Vec::new();
    let mut changed = true;
    let mut iterations = 0;

    while changed && iterations < config.max_iterations {
        changed = false;
        iterations += 1;

        for node in nodes.iter().filter(|n| !n.kind.is_input()) {
            inputs.clear();
            inputs.extend((0..node.kind.input_count()).map(|port| {
                wiring
                    .get(&(node.id, port))
                    .and_then(|from| values.get(from))
                    .copied()
                    .unwrap_or(false)
            }));

            let value = node.kind.evaluate(&inputs, node.state);
            if values.insert(node.id, value) != Some(value) {
                trace!("pass {}: {} := {}", iterations, node, value);
                changed = true;
            }
        }
    }

    if changed {
        debug!("simulate: no fixpoint after {} passes", iterations);
    } else {
        debug!("simulate: fixpoint after {} passes", iterations);
    }

    values
}
