//! Plain-text netlist format.
//!
//! A netlist file lists nodes on a `nodes` line and wires on a `wires` line:
//!
//! ```text
//! # half adder input stage
//! nodes I:0:100,100:A:0;I:1:100,200:B:1;X:2:300,150:XOR;O:3:500,150:Sum
//! wires 0>2:0;1>2:1;2>3:0
//! ```
//!
//! Each node is `T:id:x,y:label[:state]` where `T` is the one-letter
//! [`code`][crate::component::ComponentKind::code] of its kind and `state`
//! (`0`/`1`) is only allowed on switches. Labels are percent-encoded the way
//! `encodeURIComponent` does it, so any label survives a round trip (`Out 1`
//! is written as `Out%201`). Each wire is `from>to:port`;
//! wires get fresh ids in file order. Blank lines and `#` comments are
//! ignored, and either line may be missing or empty.
//!
//! Parsing is strict: a malformed entry is an error rather than being skipped,
//! and the result goes through [`Circuit::from_parts`], so integrity problems
//! surface as [`FormatError::Circuit`].

use std::fmt;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::circuit::{Circuit, CircuitError};
use crate::component::ComponentKind;
use crate::node::{Connection, Node};
use crate::types::{ConnectionId, NodeId};

/// Bytes left unescaped in labels, matching `encodeURIComponent`.
const LABEL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug)]
pub enum FormatError {
    /// File I/O error.
    Io(io::Error),
    /// Parse error at the given (1-based) line.
    Parse { line: usize, message: String },
    /// The netlist parsed but does not describe a well-formed circuit.
    Circuit(CircuitError),
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        FormatError::Io(e)
    }
}

impl From<CircuitError> for FormatError {
    fn from(e: CircuitError) -> Self {
        FormatError::Circuit(e)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Io(e) => write!(f, "I/O error: {}", e),
            FormatError::Parse { line, message } => write!(f, "Parse error at line {}: {}", line, message),
            FormatError::Circuit(e) => write!(f, "Invalid circuit: {}", e),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Io(e) => Some(e),
            FormatError::Circuit(e) => Some(e),
            _ => None,
        }
    }
}

impl Circuit {
    pub fn to_netlist_string(&self) -> String {
        let nodes: Vec<String> = self
            .nodes()
            .iter()
            .map(|node| {
                let label = utf8_percent_encode(&node.label, LABEL);
                let mut part = format!("{}:{}:{},{}:{}", node.kind.code(), node.id.get(), node.x, node.y, label);
                if node.kind.is_input() {
                    part.push_str(if node.state.unwrap_or(false) { ":1" } else { ":0" });
                }
                part
            })
            .collect();

        let wires: Vec<String> = self
            .connections()
            .iter()
            .map(|c| format!("{}>{}:{}", c.from.get(), c.to.get(), c.input_index))
            .collect();

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "nodes {}", nodes.join(";"));
        let _ = writeln!(out, "wires {}", wires.join(";"));
        out
    }

    pub fn from_netlist_str(input: &str) -> Result<Circuit, FormatError> {
        let mut nodes = Vec::new();
        let mut connections = Vec::new();

        for (i, raw) in input.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let entries = rest.trim_start().split(';').filter(|s| !s.is_empty());
            match keyword {
                "nodes" => {
                    for entry in entries {
                        nodes.push(parse_node(entry).map_err(|message| FormatError::Parse {
                            line: line_no,
                            message,
                        })?);
                    }
                }
                "wires" => {
                    for entry in entries {
                        let id = ConnectionId::new(connections.len() as u32);
                        connections.push(parse_wire(id, entry).map_err(|message| FormatError::Parse {
                            line: line_no,
                            message,
                        })?);
                    }
                }
                other => {
                    return Err(FormatError::Parse {
                        line: line_no,
                        message: format!("unknown section '{}'", other),
                    })
                }
            }
        }

        debug!(
            "from_netlist_str: {} nodes, {} wires",
            nodes.len(),
            connections.len()
        );
        Ok(Circuit::from_parts(nodes, connections)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Circuit, FormatError> {
        let content = fs::read_to_string(path)?;
        Self::from_netlist_str(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FormatError> {
        let content = self.to_netlist_string();
        fs::write(path, content)?;
        Ok(())
    }
}

fn parse_node(entry: &str) -> Result<Node, String> {
    let sections: Vec<&str> = entry.split(':').collect();
    if sections.len() < 4 || sections.len() > 5 {
        return Err(format!("expected 'T:id:x,y:label[:state]', got '{}'", entry));
    }

    let mut code = sections[0].chars();
    let kind = match (code.next(), code.next()) {
        (Some(c), None) => ComponentKind::from_code(c),
        _ => None,
    }
    .ok_or_else(|| format!("unknown component code '{}'", sections[0]))?;

    let id = sections[1]
        .parse::<NodeId>()
        .map_err(|e| format!("bad node id '{}': {}", sections[1], e))?;

    let (x, y) = sections[2]
        .split_once(',')
        .ok_or_else(|| format!("bad position '{}'", sections[2]))?;
    let x = x.parse::<i32>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.parse::<i32>().map_err(|e| format!("bad y '{}': {}", y, e))?;

    let label = percent_decode_str(sections[3])
        .decode_utf8()
        .map_err(|e| format!("bad label '{}': {}", sections[3], e))?;

    let mut node = Node::new(id, kind, x, y, label);
    let state = match sections.get(4) {
        None | Some(&"") => return Ok(node),
        Some(&"0") => false,
        Some(&"1") => true,
        Some(other) => return Err(format!("bad state '{}'", other)),
    };
    if !kind.is_input() {
        return Err(format!("state on non-switch node {}", id));
    }
    node.state = Some(state);
    Ok(node)
}

fn parse_wire(id: ConnectionId, entry: &str) -> Result<Connection, String> {
    let malformed = || format!("expected 'from>to:port', got '{}'", entry);
    let (from, rest) = entry.split_once('>').ok_or_else(malformed)?;
    let (to, port) = rest.split_once(':').ok_or_else(malformed)?;

    let from = from.parse::<NodeId>().map_err(|e| format!("bad source '{}': {}", from, e))?;
    let to = to.parse::<NodeId>().map_err(|e| format!("bad target '{}': {}", to, e))?;
    let port = port.parse::<usize>().map_err(|e| format!("bad port '{}': {}", port, e))?;
    Ok(Connection::new(id, from, to, port))
}
