//! Preset circuits.
use std::fmt;
use std::str::FromStr;

use crate::circuit::Circuit;
use crate::component::{ComponentKind, UnknownKind};
use crate::node::{Connection, Node};
use crate::types::{ConnectionId, NodeId};

/// Single-gate demonstrations: one or two switches, one gate, one bulb.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Demo {
    And,
    Or,
    Not,
    Xor,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::And, Demo::Or, Demo::Not, Demo::Xor];

    pub const fn kind(self) -> ComponentKind {
        match self {
            Demo::And => ComponentKind::And,
            Demo::Or => ComponentKind::Or,
            Demo::Not => ComponentKind::Not,
            Demo::Xor => ComponentKind::Xor,
        }
    }

    pub fn build(self) -> Circuit {
        let mut circuit = Circuit::new();
        let kind = self.kind();
        if kind.input_count() == 1 {
            let a = circuit.add_labeled_node(ComponentKind::Input, 100, 150, "A");
            let gate = circuit.add_labeled_node(kind, 300, 150, kind.name());
            let out = circuit.add_labeled_node(ComponentKind::Output, 500, 150, "Out");
            wire(&mut circuit, a, gate, 0);
            wire(&mut circuit, gate, out, 0);
        } else {
            let a = circuit.add_labeled_node(ComponentKind::Input, 100, 100, "A");
            let b = circuit.add_labeled_node(ComponentKind::Input, 100, 200, "B");
            let gate = circuit.add_labeled_node(kind, 300, 150, kind.name());
            let out = circuit.add_labeled_node(ComponentKind::Output, 500, 150, "Out");
            wire(&mut circuit, a, gate, 0);
            wire(&mut circuit, b, gate, 1);
            wire(&mut circuit, gate, out, 0);
        }
        circuit
    }
}

// Every preset wire is valid by construction.
fn wire(circuit: &mut Circuit, from: NodeId, to: NodeId, input_index: usize) {
    if let Err(e) = circuit.connect(from, to, input_index) {
        unreachable!("preset wiring failed: {}", e);
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().name())
    }
}

impl FromStr for Demo {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.kind().name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl Circuit {
    /// The circuit a fresh designer opens with: `A` and `B` into an AND gate, lighting `Out`.
    pub fn starter() -> Circuit {
        let n = NodeId::new;
        let nodes = vec![
            Node::new(n(0), ComponentKind::Input, 100, 100, "A"),
            Node::new(n(1), ComponentKind::Input, 100, 250, "B"),
            Node::new(n(2), ComponentKind::And, 300, 175, "AND"),
            Node::new(n(3), ComponentKind::Output, 500, 175, "Out"),
        ];
        let connections = vec![
            Connection::new(ConnectionId::new(0), n(0), n(2), 0),
            Connection::new(ConnectionId::new(1), n(1), n(2), 1),
            Connection::new(ConnectionId::new(2), n(2), n(3), 0),
        ];
        match Circuit::from_parts(nodes, connections) {
            Ok(circuit) => circuit,
            Err(e) => unreachable!("starter circuit is malformed: {}", e),
        }
    }
}
