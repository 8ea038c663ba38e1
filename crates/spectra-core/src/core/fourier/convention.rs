use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sign of the exponent used by the forward transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignConvention {
    /// Forward uses `exp(-2πi·k·n/N)`, inverse uses `exp(+2πi·k·n/N)`.
    #[default]
    Engineering,
    /// Forward uses `exp(+2πi·k·n/N)`, inverse uses `exp(-2πi·k·n/N)`.
    Physics,
}

impl SignConvention {
    /// Sign of the exponent in the forward transform (`-1.0` or `+1.0`).
    pub fn forward_sign(self) -> f64 {
        match self {
            SignConvention::Engineering => -1.0,
            SignConvention::Physics => 1.0,
        }
    }
}

impl fmt::Display for SignConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignConvention::Engineering => write!(f, "engineering"),
            SignConvention::Physics => write!(f, "physics"),
        }
    }
}

impl FromStr for SignConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "engineering" => Ok(SignConvention::Engineering),
            "physics" => Ok(SignConvention::Physics),
            other => Err(format!(
                "unknown sign convention '{}' (expected 'engineering' or 'physics')",
                other
            )),
        }
    }
}

/// Placement of the `1/N` factor between the two directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Unscaled forward, `1/N` on the inverse.
    #[default]
    Backward,
    /// `1/√N` on both directions.
    Ortho,
    /// `1/N` on the forward, unscaled inverse.
    Forward,
}

impl Normalization {
    pub fn forward_scale(self, len: usize) -> f64 {
        match self {
            Normalization::Backward => 1.0,
            Normalization::Ortho => 1.0 / (len as f64).sqrt(),
            Normalization::Forward => 1.0 / len as f64,
        }
    }

    pub fn inverse_scale(self, len: usize) -> f64 {
        match self {
            Normalization::Backward => 1.0 / len as f64,
            Normalization::Ortho => 1.0 / (len as f64).sqrt(),
            Normalization::Forward => 1.0,
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::Backward => write!(f, "backward"),
            Normalization::Ortho => write!(f, "ortho"),
            Normalization::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backward" => Ok(Normalization::Backward),
            "ortho" => Ok(Normalization::Ortho),
            "forward" => Ok(Normalization::Forward),
            other => Err(format!(
                "unknown normalization '{}' (expected 'backward', 'ortho' or 'forward')",
                other
            )),
        }
    }
}
