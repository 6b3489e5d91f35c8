use std::fmt::{Display, Formatter};

use crate::component::ComponentKind;
use crate::types::{ConnectionId, NodeId};

/// A placed component.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: ComponentKind,
    pub x: i32,
    pub y: i32,
    pub label: String,
    /// Switch position. Only meaningful for [`ComponentKind::Input`].
    pub state: Option<bool>,
}

impl Node {
    pub fn new(id: NodeId, kind: ComponentKind, x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            label: label.into(),
            state: if kind.is_input() { Some(false) } else { None },
        }
    }

    pub fn with_state(mut self, state: bool) -> Self {
        self.state = Some(state);
        self
    }

    /// Key ordering nodes top-to-bottom, then left-to-right.
    pub(crate) fn position_key(&self) -> (i32, i32, NodeId) {
        (self.y, self.x, self.id)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}({})", self.kind, self.id, self.label)
    }
}

/// A wire from the output of `from` into input port `input_index` of `to`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NodeId,
    pub to: NodeId,
    pub input_index: usize,
}

impl Connection {
    pub const fn new(id: ConnectionId, from: NodeId, to: NodeId, input_index: usize) -> Self {
        Self {
            id,
            from,
            to,
            input_index,
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

impl Display for Connection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}[{}]", self.from, self.to, self.input_index)
    }
}
