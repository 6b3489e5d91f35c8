//! # circuit-rs: Logic circuit simulation in Rust
//!
//! **`circuit-rs`** simulates small gate-level circuits of the kind built in an
//! interactive circuit designer: switches, bulbs and `AND`/`OR`/`NOT`/`XOR`
//! gates joined by wires, possibly with feedback loops.
//!
//! ## Model
//!
//! A [`Circuit`][crate::circuit::Circuit] is a list of nodes (placed
//! components) and connections (wires into numbered input ports). Simulation is
//! a zero-delay relaxation: node values are recomputed pass after pass until
//! they stop changing or a pass budget (50 by default) runs out. Unwired ports
//! read as `false`. Cycles never make the simulator fail or hang; an
//! oscillating loop just reports wherever the budget left it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use circuit_rs::circuit::Circuit;
//! use circuit_rs::component::ComponentKind;
//!
//! let mut circuit = Circuit::new();
//! let a = circuit.add_node(ComponentKind::Input, 100, 100); // "A"
//! let b = circuit.add_node(ComponentKind::Input, 100, 200); // "B"
//! let and = circuit.add_node(ComponentKind::And, 300, 150);
//! let out = circuit.add_node(ComponentKind::Output, 500, 150);
//! circuit.connect(a, and, 0).unwrap();
//! circuit.connect(b, and, 1).unwrap();
//! circuit.connect(and, out, 0).unwrap();
//!
//! circuit.toggle_input(a).unwrap();
//! circuit.toggle_input(b).unwrap();
//! assert!(circuit.simulate()[&out]);
//!
//! let table = circuit.truth_table().unwrap();
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.output_column(0).unwrap(), vec![0, 0, 0, 1]);
//! ```
//!
//! ## Core Components
//!
//! - **[`component`]**: the closed set of component kinds and their evaluation rules.
//! - **[`circuit`]**: the graph and its editing operations.
//! - **[`simulation`]**: signal propagation.
//! - **[`truth_table`]**: exhaustive enumeration of switch positions.
//! - **[`format`]**: a plain-text netlist format for saving and loading circuits.

pub mod circuit;
pub mod component;
pub mod demo;
pub mod format;
pub mod node;
pub mod simulation;
pub mod truth_table;
pub mod types;
