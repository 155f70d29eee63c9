use anyhow::{bail, Result};

/// Three-step ordinal used by most categorical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Ordinal encoding consumed by the model (Low=0, Medium=1, High=2).
    pub fn encode(self) -> f64 {
        match self {
            Level::Low => 0.0,
            Level::Medium => 1.0,
            Level::High => 2.0,
        }
    }

    pub fn from_ordinal(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::Medium),
            2 => Ok(Level::High),
            other => bail!("ordinal out of range (expected 0-2): {}", other),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "Low" => Ok(Level::Low),
            "Medium" => Ok(Level::Medium),
            "High" => Ok(Level::High),
            other => bail!("unrecognized level '{}' (expected Low/Medium/High)", other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

/// Home internet availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Internet {
    No,
    Yes,
}

impl Internet {
    /// Binary encoding consumed by the model (No=0, Yes=1).
    pub fn encode(self) -> f64 {
        match self {
            Internet::No => 0.0,
            Internet::Yes => 1.0,
        }
    }

    pub fn from_ordinal(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Internet::No),
            1 => Ok(Internet::Yes),
            other => bail!("binary flag out of range (expected 0-1): {}", other),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "Yes" => Ok(Internet::Yes),
            "No" => Ok(Internet::No),
            other => bail!("unrecognized flag '{}' (expected Yes/No)", other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Internet::No => "No",
            Internet::Yes => "Yes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_encoding_is_total() {
        assert_eq!(Level::Low.encode(), 0.0);
        assert_eq!(Level::Medium.encode(), 1.0);
        assert_eq!(Level::High.encode(), 2.0);
    }

    #[test]
    fn level_parse_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::parse(level.label()).unwrap(), level);
        }
    }

    #[test]
    fn level_parse_rejects_unknown_labels() {
        assert!(Level::parse("medium").is_err());
        assert!(Level::parse("Very High").is_err());
        assert!(Level::parse("").is_err());
    }

    #[test]
    fn level_from_ordinal_rejects_out_of_range() {
        assert!(Level::from_ordinal(-1).is_err());
        assert!(Level::from_ordinal(3).is_err());
        assert_eq!(Level::from_ordinal(1).unwrap(), Level::Medium);
    }

    #[test]
    fn internet_encoding_matches_labels() {
        assert_eq!(Internet::No.encode(), 0.0);
        assert_eq!(Internet::Yes.encode(), 1.0);
        assert_eq!(Internet::parse("Yes").unwrap(), Internet::Yes);
        assert!(Internet::parse("yes").is_err());
        assert!(Internet::from_ordinal(2).is_err());
    }
}
