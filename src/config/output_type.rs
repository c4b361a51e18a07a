use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputType {
    /// One post id per line
    Ids,
    /// Aligned summary table
    #[default]
    Table,
    /// Posts as a JSON array
    Json,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ids => write!(f, "ids"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}
