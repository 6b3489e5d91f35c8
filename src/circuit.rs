//! The circuit graph.
//!
//! A [`Circuit`] owns a list of [`Node`]s and the [`Connection`]s between
//! them and keeps the graph well-formed:
//!
//! - every connection starts and ends at a live node,
//! - every connection starts at a node with an output port,
//! - every connection targets an existing input port,
//! - each input port is fed by at most one connection,
//! - deleting a node deletes every connection touching it.
//!
//! Simulation and truth-table generation only read the graph; see
//! [`simulation`][crate::simulation] and [`truth_table`][crate::truth_table].

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::component::ComponentKind;
use crate::node::{Connection, Node};
use crate::simulation::{self, SimulationConfig, SimulationState};
use crate::truth_table::{self, TruthTable, TruthTableError};
use crate::types::{ConnectionId, NodeId};

/// Ways in which a graph edit or a graph snapshot can be malformed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CircuitError {
    /// No node with this id.
    UnknownNode(NodeId),
    DuplicateNode(NodeId),
    DuplicateConnection(ConnectionId),
    /// Attempt to wire a node into itself.
    SelfConnection(NodeId),
    /// The source node has no output port.
    NoOutputPort { node: NodeId, kind: ComponentKind },
    /// The target port does not exist on the destination node.
    InvalidPort {
        node: NodeId,
        kind: ComponentKind,
        input_index: usize,
    },
    /// Two connections feed the same input port.
    PortOccupied { node: NodeId, input_index: usize },
    /// The node is not a switch.
    NotAnInput(NodeId),
    /// No fresh node or connection id is left to hand out.
    IdSpaceExhausted,
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::UnknownNode(id) => write!(f, "unknown node {}", id),
            CircuitError::DuplicateNode(id) => write!(f, "duplicate node {}", id),
            CircuitError::DuplicateConnection(id) => write!(f, "duplicate connection {}", id),
            CircuitError::SelfConnection(id) => write!(f, "cannot wire node {} into itself", id),
            CircuitError::NoOutputPort { node, kind } => {
                write!(f, "node {} ({}) has no output port", node, kind)
            }
            CircuitError::InvalidPort { node, kind, input_index } => write!(
                f,
                "node {} ({}) has no input port {} (it has {})",
                node,
                kind,
                input_index,
                kind.input_count()
            ),
            CircuitError::PortOccupied { node, input_index } => {
                write!(f, "input port {} of node {} is wired more than once", input_index, node)
            }
            CircuitError::NotAnInput(id) => write!(f, "node {} is not an input", id),
            CircuitError::IdSpaceExhausted => write!(f, "no fresh ids left"),
        }
    }
}

impl std::error::Error for CircuitError {}

#[derive(Debug, Clone, Default)]
pub struct Circuit {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    next_node: u32,
    next_connection: u32,
}

// Constructors
impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a circuit from a snapshot, checking referential integrity up front.
    ///
    /// Unlike [`connect`][Circuit::connect], a port claimed twice is an error
    /// here rather than a replacement: a snapshot should already be well-formed.
    /// A snapshot using the largest id leaves nothing to allocate next and is
    /// rejected with [`CircuitError::IdSpaceExhausted`].
    pub fn from_parts(nodes: Vec<Node>, connections: Vec<Connection>) -> Result<Self, CircuitError> {
        let mut node_ids = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !node_ids.insert(node.id) {
                return Err(CircuitError::DuplicateNode(node.id));
            }
        }

        let mut connection_ids = HashSet::with_capacity(connections.len());
        let mut ports = HashSet::with_capacity(connections.len());
        for c in &connections {
            if !connection_ids.insert(c.id) {
                return Err(CircuitError::DuplicateConnection(c.id));
            }
            let from = find(&nodes, c.from)?;
            let to = find(&nodes, c.to)?;
            check_wire(from, to, c.input_index)?;
            if !ports.insert((c.to, c.input_index)) {
                return Err(CircuitError::PortOccupied {
                    node: c.to,
                    input_index: c.input_index,
                });
            }
        }

        let next_node = next_free_id(nodes.iter().map(|n| n.id.get()))?;
        let next_connection = next_free_id(connections.iter().map(|c| c.id.get()))?;

        Ok(Self {
            nodes,
            connections,
            next_node,
            next_connection,
        })
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Connection>) {
        (self.nodes, self.connections)
    }
}

// Getters
impl Circuit {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Finds the first node carrying the given label.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Returns the connection feeding input port `input_index` of `to`, if any.
    pub fn connection_into(&self, to: NodeId, input_index: usize) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.to == to && c.input_index == input_index)
    }

    /// Switches, ordered top-to-bottom (ties broken left-to-right, then by id).
    pub fn inputs(&self) -> Vec<&Node> {
        self.sorted_by_position(ComponentKind::Input)
    }

    /// Bulbs, ordered like [`inputs`][Circuit::inputs].
    pub fn outputs(&self) -> Vec<&Node> {
        self.sorted_by_position(ComponentKind::Output)
    }

    fn sorted_by_position(&self, kind: ComponentKind) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.nodes.iter().filter(|n| n.kind == kind).collect();
        nodes.sort_by_key(|n| n.position_key());
        nodes
    }
}

// Editing
impl Circuit {
    /// Places a component and labels it the way the designer palette does.
    ///
    /// # Panics
    ///
    /// Panics if the node id space is exhausted. See [`try_add_node`][Circuit::try_add_node].
    pub fn add_node(&mut self, kind: ComponentKind, x: i32, y: i32) -> NodeId {
        let label = self.next_label(kind);
        self.add_labeled_node(kind, x, y, label)
    }

    /// # Panics
    ///
    /// Panics if the node id space is exhausted.
    pub fn add_labeled_node(&mut self, kind: ComponentKind, x: i32, y: i32, label: impl Into<String>) -> NodeId {
        match self.try_add_labeled_node(kind, x, y, label) {
            Ok(id) => id,
            Err(e) => panic!("Cannot add node: {}", e),
        }
    }

    pub fn try_add_node(&mut self, kind: ComponentKind, x: i32, y: i32) -> Result<NodeId, CircuitError> {
        let label = self.next_label(kind);
        self.try_add_labeled_node(kind, x, y, label)
    }

    pub fn try_add_labeled_node(
        &mut self,
        kind: ComponentKind,
        x: i32,
        y: i32,
        label: impl Into<String>,
    ) -> Result<NodeId, CircuitError> {
        let id = NodeId::new(allocate(&mut self.next_node)?);
        let node = Node::new(id, kind, x, y, label);
        debug!("add_node: {}", node);
        self.nodes.push(node);
        Ok(id)
    }

    fn next_label(&self, kind: ComponentKind) -> String {
        match kind {
            ComponentKind::Input => {
                let switches: Vec<&str> = self
                    .nodes
                    .iter()
                    .filter(|n| n.kind.is_input())
                    .map(|n| n.label.as_str())
                    .collect();
                ('A'..='Z')
                    .map(String::from)
                    .find(|letter| !switches.contains(&letter.as_str()))
                    .unwrap_or_else(|| format!("S{}", switches.len() + 1))
            }
            ComponentKind::Output => {
                let count = self.nodes.iter().filter(|n| n.kind.is_output()).count();
                format!("Out {}", count + 1)
            }
            gate => gate.name().to_string(),
        }
    }

    /// Wires the output of `from` into input port `input_index` of `to`.
    ///
    /// A wire already feeding that port is replaced.
    pub fn connect(&mut self, from: NodeId, to: NodeId, input_index: usize) -> Result<ConnectionId, CircuitError> {
        if from == to {
            return Err(CircuitError::SelfConnection(from));
        }
        check_wire(find(&self.nodes, from)?, find(&self.nodes, to)?, input_index)?;
        let id = ConnectionId::new(allocate(&mut self.next_connection)?);

        let before = self.connections.len();
        self.connections
            .retain(|c| !(c.to == to && c.input_index == input_index));
        if self.connections.len() != before {
            debug!("connect: replacing wire into {}[{}]", to, input_index);
        }

        let connection = Connection::new(id, from, to, input_index);
        debug!("connect: {}", connection);
        self.connections.push(connection);
        Ok(id)
    }

    pub fn disconnect(&mut self, id: ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id == id)?;
        Some(self.connections.remove(index))
    }

    /// Deletes a node together with every wire touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        self.connections.retain(|c| !c.touches(id));
        Some(self.nodes.remove(index))
    }

    /// Deletes several nodes at once. Returns how many were removed.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) -> usize {
        let ids: HashSet<NodeId> = ids.iter().copied().collect();
        let before = self.nodes.len();
        self.nodes.retain(|n| !ids.contains(&n.id));
        self.connections
            .retain(|c| !ids.contains(&c.from) && !ids.contains(&c.to));
        before - self.nodes.len()
    }

    /// Flips a switch and returns its new position.
    pub fn toggle_input(&mut self, id: NodeId) -> Result<bool, CircuitError> {
        let node = self.input_mut(id)?;
        let state = !node.state.unwrap_or(false);
        node.state = Some(state);
        Ok(state)
    }

    pub fn set_input(&mut self, id: NodeId, state: bool) -> Result<(), CircuitError> {
        self.input_mut(id)?.state = Some(state);
        Ok(())
    }

    fn input_mut(&mut self, id: NodeId) -> Result<&mut Node, CircuitError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CircuitError::UnknownNode(id))?;
        if !node.kind.is_input() {
            return Err(CircuitError::NotAnInput(id));
        }
        Ok(node)
    }

    /// Removes all nodes and connections. Fresh ids keep counting up.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }
}

// Analysis
impl Circuit {
    pub fn simulate(&self) -> SimulationState {
        simulation::simulate(&self.nodes, &self.connections)
    }

    pub fn simulate_with_config(&self, config: &SimulationConfig) -> SimulationState {
        simulation::simulate_with_config(&self.nodes, &self.connections, config)
    }

    pub fn truth_table(&self) -> Result<TruthTable, TruthTableError> {
        truth_table::generate_truth_table(&self.nodes, &self.connections)
    }

    pub fn truth_table_with_config(&self, config: &SimulationConfig) -> Result<TruthTable, TruthTableError> {
        truth_table::generate_truth_table_with_config(&self.nodes, &self.connections, config)
    }
}

fn find(nodes: &[Node], id: NodeId) -> Result<&Node, CircuitError> {
    nodes
        .iter()
        .find(|n| n.id == id)
        .ok_or(CircuitError::UnknownNode(id))
}

/// Hands out the current counter value. The largest id is never handed out,
/// so a counter at `u32::MAX` is exhausted.
fn allocate(counter: &mut u32) -> Result<u32, CircuitError> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(CircuitError::IdSpaceExhausted)?;
    Ok(id)
}

fn next_free_id(ids: impl Iterator<Item = u32>) -> Result<u32, CircuitError> {
    match ids.max() {
        None => Ok(0),
        Some(max) => max.checked_add(1).ok_or(CircuitError::IdSpaceExhausted),
    }
}

fn check_wire(from: &Node, to: &Node, input_index: usize) -> Result<(), CircuitError> {
    if !from.kind.has_output() {
        return Err(CircuitError::NoOutputPort {
            node: from.id,
            kind: from.kind,
        });
    }
    if input_index >= to.kind.input_count() {
        return Err(CircuitError::InvalidPort {
            node: to.id,
            kind: to.kind,
            input_index,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_add_node_assigns_fresh_ids() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let b = circuit.add_node(ComponentKind::And, 0, 0);
        assert_ne!(a, b);
        circuit.remove_node(b);
        let c = circuit.add_node(ComponentKind::Or, 0, 0);
        assert_ne!(b, c);
        assert_eq!(circuit.len(), 2);
    }

    #[test]
    fn test_switch_labels() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let b = circuit.add_node(ComponentKind::Input, 0, 0);
        assert_eq!(circuit.node(a).unwrap().label, "A");
        assert_eq!(circuit.node(b).unwrap().label, "B");

        circuit.remove_node(a);
        let c = circuit.add_node(ComponentKind::Input, 0, 0);
        assert_eq!(circuit.node(c).unwrap().label, "A");
    }

    #[test]
    fn test_switch_labels_past_z() {
        let mut circuit = Circuit::new();
        for _ in 0..26 {
            circuit.add_node(ComponentKind::Input, 0, 0);
        }
        let extra = circuit.add_node(ComponentKind::Input, 0, 0);
        assert_eq!(circuit.node(extra).unwrap().label, "S27");
    }

    #[test]
    fn test_output_and_gate_labels() {
        let mut circuit = Circuit::new();
        let o1 = circuit.add_node(ComponentKind::Output, 0, 0);
        let o2 = circuit.add_node(ComponentKind::Output, 0, 0);
        let g = circuit.add_node(ComponentKind::Xor, 0, 0);
        assert_eq!(circuit.node(o1).unwrap().label, "Out 1");
        assert_eq!(circuit.node(o2).unwrap().label, "Out 2");
        assert_eq!(circuit.node(g).unwrap().label, "XOR");
    }

    #[test]
    fn test_connect_replaces_occupied_port() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let b = circuit.add_node(ComponentKind::Input, 0, 0);
        let g = circuit.add_node(ComponentKind::And, 0, 0);

        let first = circuit.connect(a, g, 0).unwrap();
        let second = circuit.connect(b, g, 0).unwrap();
        assert_ne!(first, second);

        let into_port: Vec<_> = circuit
            .connections()
            .iter()
            .filter(|c| c.to == g && c.input_index == 0)
            .collect();
        assert_eq!(into_port.len(), 1);
        assert_eq!(into_port[0].from, b);
        assert_eq!(circuit.connection_into(g, 0).map(|c| c.id), Some(second));
    }

    #[test]
    fn test_connect_rejects_self_wire() {
        let mut circuit = Circuit::new();
        let g = circuit.add_node(ComponentKind::Not, 0, 0);
        assert_eq!(circuit.connect(g, g, 0), Err(CircuitError::SelfConnection(g)));
        assert!(circuit.connections().is_empty());
    }

    #[test]
    fn test_connect_rejects_bad_endpoints() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let out = circuit.add_node(ComponentKind::Output, 0, 0);
        let g = circuit.add_node(ComponentKind::Not, 0, 0);
        let missing = NodeId::new(100);

        assert_eq!(circuit.connect(missing, g, 0), Err(CircuitError::UnknownNode(missing)));
        assert_eq!(
            circuit.connect(out, g, 0),
            Err(CircuitError::NoOutputPort {
                node: out,
                kind: ComponentKind::Output
            })
        );
        assert_eq!(
            circuit.connect(a, g, 1),
            Err(CircuitError::InvalidPort {
                node: g,
                kind: ComponentKind::Not,
                input_index: 1
            })
        );
        assert!(matches!(circuit.connect(g, a, 0), Err(CircuitError::InvalidPort { .. })));
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let g = circuit.add_node(ComponentKind::Not, 0, 0);
        let out = circuit.add_node(ComponentKind::Output, 0, 0);
        circuit.connect(a, g, 0).unwrap();
        circuit.connect(g, out, 0).unwrap();

        let removed = circuit.remove_node(g).unwrap();
        assert_eq!(removed.kind, ComponentKind::Not);
        assert!(circuit.connections().is_empty());
        assert!(circuit.remove_node(g).is_none());
    }

    #[test]
    fn test_remove_nodes() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let b = circuit.add_node(ComponentKind::Input, 0, 0);
        let g = circuit.add_node(ComponentKind::Or, 0, 0);
        let out = circuit.add_node(ComponentKind::Output, 0, 0);
        circuit.connect(a, g, 0).unwrap();
        circuit.connect(b, g, 1).unwrap();
        circuit.connect(g, out, 0).unwrap();

        assert_eq!(circuit.remove_nodes(&[a, out, NodeId::new(42)]), 2);
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.connections().len(), 1);
        assert_eq!(circuit.connections()[0].from, b);
    }

    #[test]
    fn test_disconnect() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let out = circuit.add_node(ComponentKind::Output, 0, 0);
        let c = circuit.connect(a, out, 0).unwrap();
        assert_eq!(circuit.disconnect(c).map(|c| c.from), Some(a));
        assert!(circuit.disconnect(c).is_none());
    }

    #[test]
    fn test_toggle_input() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        let g = circuit.add_node(ComponentKind::And, 0, 0);

        assert_eq!(circuit.toggle_input(a), Ok(true));
        assert_eq!(circuit.node(a).unwrap().state, Some(true));
        assert_eq!(circuit.toggle_input(a), Ok(false));
        assert_eq!(circuit.toggle_input(g), Err(CircuitError::NotAnInput(g)));
        assert_eq!(circuit.set_input(a, true), Ok(()));
        assert_eq!(circuit.simulate()[&a], true);
    }

    #[test]
    fn test_clear_keeps_counting() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node(ComponentKind::Input, 0, 0);
        circuit.clear();
        assert!(circuit.is_empty());
        let b = circuit.add_node(ComponentKind::Input, 0, 0);
        assert!(b > a);
    }

    #[test]
    fn test_inputs_sorted_by_position() {
        let mut circuit = Circuit::new();
        let low = circuit.add_labeled_node(ComponentKind::Input, 0, 300, "low");
        let high = circuit.add_labeled_node(ComponentKind::Input, 0, 100, "high");
        let right = circuit.add_labeled_node(ComponentKind::Input, 50, 300, "right");
        let ids: Vec<NodeId> = circuit.inputs().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![high, low, right]);
    }

    #[test]
    fn test_from_parts_validates() {
        let a = Node::new(NodeId::new(1), ComponentKind::Input, 0, 0, "A");
        let g = Node::new(NodeId::new(2), ComponentKind::Not, 0, 0, "NOT");
        let wire = Connection::new(ConnectionId::new(1), NodeId::new(1), NodeId::new(2), 0);

        let circuit = Circuit::from_parts(vec![a.clone(), g.clone()], vec![wire]).unwrap();
        assert_eq!(circuit.len(), 2);

        assert_eq!(
            Circuit::from_parts(vec![a.clone(), a.clone()], vec![]).unwrap_err(),
            CircuitError::DuplicateNode(NodeId::new(1))
        );
        assert_eq!(
            Circuit::from_parts(vec![a.clone()], vec![wire]).unwrap_err(),
            CircuitError::UnknownNode(NodeId::new(2))
        );
        let twice = Connection::new(ConnectionId::new(2), NodeId::new(1), NodeId::new(2), 0);
        assert_eq!(
            Circuit::from_parts(vec![a.clone(), g.clone()], vec![wire, twice]).unwrap_err(),
            CircuitError::PortOccupied {
                node: NodeId::new(2),
                input_index: 0
            }
        );
        assert_eq!(
            Circuit::from_parts(vec![a, g], vec![wire, wire]).unwrap_err(),
            CircuitError::DuplicateConnection(ConnectionId::new(1))
        );
    }

    #[test]
    fn test_from_parts_resumes_ids() {
        let a = Node::new(NodeId::new(7), ComponentKind::Input, 0, 0, "A");
        let mut circuit = Circuit::from_parts(vec![a], vec![]).unwrap();
        let b = circuit.add_node(ComponentKind::Output, 0, 0);
        assert_eq!(b, NodeId::new(8));
        let c = circuit.connect(NodeId::new(7), b, 0).unwrap();
        assert_eq!(c, ConnectionId::new(0));
    }

    #[test]
    fn test_from_parts_rejects_largest_id() {
        let a = Node::new(NodeId::new(u32::MAX), ComponentKind::Input, 0, 0, "A");
        assert_eq!(
            Circuit::from_parts(vec![a], vec![]).unwrap_err(),
            CircuitError::IdSpaceExhausted
        );

        let a = Node::new(NodeId::new(0), ComponentKind::Input, 0, 0, "A");
        let out = Node::new(NodeId::new(1), ComponentKind::Output, 0, 0, "Out");
        let wire = Connection::new(ConnectionId::new(u32::MAX), a.id, out.id, 0);
        assert_eq!(
            Circuit::from_parts(vec![a, out], vec![wire]).unwrap_err(),
            CircuitError::IdSpaceExhausted
        );
    }

    #[test]
    fn test_exhausted_ids_are_not_reused() {
        let a = Node::new(NodeId::new(u32::MAX - 1), ComponentKind::Input, 0, 0, "A");
        let out = Node::new(NodeId::new(3), ComponentKind::Output, 0, 0, "Out");
        let wire = Connection::new(ConnectionId::new(u32::MAX - 1), a.id, out.id, 0);
        let mut circuit = Circuit::from_parts(vec![a, out], vec![wire]).unwrap();

        assert_eq!(
            circuit.try_add_node(ComponentKind::Not, 0, 0),
            Err(CircuitError::IdSpaceExhausted)
        );
        assert_eq!(
            circuit.connect(NodeId::new(u32::MAX - 1), NodeId::new(3), 0),
            Err(CircuitError::IdSpaceExhausted)
        );
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.connections().len(), 1);
    }

    #[test]
    #[should_panic(expected = "Cannot add node")]
    fn test_add_node_panics_when_exhausted() {
        let a = Node::new(NodeId::new(u32::MAX - 1), ComponentKind::Input, 0, 0, "A");
        let mut circuit = Circuit::from_parts(vec![a], vec![]).unwrap();
        circuit.add_node(ComponentKind::Output, 0, 0);
    }

    #[test]
    fn test_from_parts_rejects_bad_wires() {
        let a = Node::new(NodeId::new(0), ComponentKind::Input, 0, 0, "A");
        let g = Node::new(NodeId::new(1), ComponentKind::Not, 0, 0, "NOT");
        let out = Node::new(NodeId::new(2), ComponentKind::Output, 0, 0, "Out");

        let from_bulb = Connection::new(ConnectionId::new(0), out.id, g.id, 0);
        assert_eq!(
            Circuit::from_parts(vec![a.clone(), g.clone(), out.clone()], vec![from_bulb]).unwrap_err(),
            CircuitError::NoOutputPort {
                node: out.id,
                kind: ComponentKind::Output
            }
        );

        let second_port = Connection::new(ConnectionId::new(0), a.id, g.id, 1);
        assert_eq!(
            Circuit::from_parts(vec![a, g.clone(), out], vec![second_port]).unwrap_err(),
            CircuitError::InvalidPort {
                node: g.id,
                kind: ComponentKind::Not,
                input_index: 1
            }
        );
    }
}
