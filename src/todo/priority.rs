use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a todo
///
/// Serialized in lowercase to match the TOML storage format and tool parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Display attributes of a priority badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    /// Upper-case badge text (e.g., "HIGH")
    pub label: &'static str,
    /// Badge and icon colour
    pub color: &'static str,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Badge attributes for this priority
    pub fn style(self) -> PriorityStyle {
        match self {
            Priority::High => PriorityStyle {
                label: "HIGH",
                color: "red",
            },
            Priority::Medium => PriorityStyle {
                label: "MEDIUM",
                color: "yellow",
            },
            Priority::Low => PriorityStyle {
                label: "LOW",
                color: "green",
            },
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}
