//! Registry of component kinds.
//!
//! Every placeable component is one of the [`ComponentKind`] variants. A kind
//! fixes the number of input and output ports and carries a pure evaluation
//! rule. The set of kinds is closed: adding one means adding a variant here
//! and, if it keeps state, teaching the simulator how to seed it.
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ComponentKind {
    /// User-controlled switch.
    Input,
    /// Observed bulb.
    Output,
    And,
    Or,
    Not,
    Xor,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Input,
        ComponentKind::Output,
        ComponentKind::And,
        ComponentKind::Or,
        ComponentKind::Not,
        ComponentKind::Xor,
    ];
}

// Ports
impl ComponentKind {
    pub const fn input_count(self) -> usize {
        match self {
            ComponentKind::Input => 0,
            ComponentKind::Output | ComponentKind::Not => 1,
            ComponentKind::And | ComponentKind::Or | ComponentKind::Xor => 2,
        }
    }

    pub const fn output_count(self) -> usize {
        match self {
            ComponentKind::Output => 0,
            _ => 1,
        }
    }

    pub const fn has_output(self) -> bool {
        self.output_count() > 0
    }

    pub const fn is_input(self) -> bool {
        matches!(self, ComponentKind::Input)
    }

    pub const fn is_output(self) -> bool {
        matches!(self, ComponentKind::Output)
    }
}

// Evaluation
impl ComponentKind {
    /// Evaluates the component on the given port values.
    ///
    /// Ports missing from `inputs` read as `false`. Only [`ComponentKind::Input`]
    /// looks at `state`, and it ignores `inputs` entirely.
    pub fn evaluate(self, inputs: &[bool], state: Option<bool>) -> bool {
        let port = |i: usize| inputs.get(i).copied().unwrap_or(false);
        match self {
            ComponentKind::Input => state.unwrap_or(false),
            ComponentKind::Output => port(0),
            ComponentKind::And => port(0) && port(1),
            ComponentKind::Or => port(0) || port(1),
            ComponentKind::Not => !port(0),
            ComponentKind::Xor => port(0) ^ port(1),
        }
    }
}

// Names
impl ComponentKind {
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Input => "INPUT",
            ComponentKind::Output => "OUTPUT",
            ComponentKind::And => "AND",
            ComponentKind::Or => "OR",
            ComponentKind::Not => "NOT",
            ComponentKind::Xor => "XOR",
        }
    }

    /// Human-facing name of the component, as shown in a palette.
    pub const fn label(self) -> &'static str {
        match self {
            ComponentKind::Input => "Switch",
            ComponentKind::Output => "Bulb",
            other => other.name(),
        }
    }

    /// One-letter code used by the netlist format.
    pub const fn code(self) -> char {
        match self {
            ComponentKind::Input => 'I',
            ComponentKind::Output => 'O',
            ComponentKind::And => 'A',
            ComponentKind::Or => 'R', // 'O' is taken by Output
            ComponentKind::Not => 'N',
            ComponentKind::Xor => 'X',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
