use clap::ValueEnum;
use serde::Serialize;

/// The two attendance checkboxes rendered for every event cell.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
pub enum Checkbox {
    /// Time-in mark
    In,
    /// Time-out mark
    Out,
}

impl Checkbox {
    /// Prefix of the form field carrying this checkbox (`timein_<id>`).
    pub fn field_prefix(&self) -> &'static str {
        match self {
            Checkbox::In => "timein",
            Checkbox::Out => "timeout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Checkbox::In => "Time In",
            Checkbox::Out => "Time Out",
        }
    }
}
