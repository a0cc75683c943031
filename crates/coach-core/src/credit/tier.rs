use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoachError;

/// Subscription tier. Each tier grants a fixed number of AI credits per
/// billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Explorer,
    Builder,
    Operator,
    Ceo,
}

impl Tier {
    pub fn credits(&self) -> u32 {
        match self {
            Tier::Explorer => 50,
            Tier::Builder => 500,
            Tier::Operator => 2000,
            Tier::Ceo => 5000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Explorer => "explorer",
            Tier::Builder => "builder",
            Tier::Operator => "operator",
            Tier::Ceo => "ceo",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explorer" => Ok(Tier::Explorer),
            "builder" => Ok(Tier::Builder),
            "operator" => Ok(Tier::Operator),
            "ceo" => Ok(Tier::Ceo),
            other => Err(CoachError::config(format!("unknown tier '{other}'"))),
        }
    }
}
