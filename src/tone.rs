use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style the rewrite service is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Academic,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Casual, Tone::Academic, Tone::Concise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Academic => "academic",
            Tone::Concise => "concise",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tone: {}", s))
    }
}
