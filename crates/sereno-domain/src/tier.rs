//! Tier module - stress classification and support-session tiers

/// Stress tier derived from a stress level in [0, 10].
///
/// The thresholds (3 and 6) are fixed and shared by every consumer: the
/// recommendation table, the session classification, and any caller-side
/// alerting all read the same boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressTier {
    /// Stress level <= 3
    Low,

    /// Stress level in (3, 6]
    Moderate,

    /// Stress level > 6
    High,
}

impl StressTier {
    /// Classify a stress level.
    pub fn from_level(stress_level: f64) -> Self {
        if stress_level <= 3.0 {
            StressTier::Low
        } else if stress_level <= 6.0 {
            StressTier::Moderate
        } else {
            StressTier::High
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StressTier::Low => "bajo",
            StressTier::Moderate => "medio",
            StressTier::High => "alto",
        }
    }

    /// Parse a tier from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bajo" => Some(StressTier::Low),
            "medio" => Some(StressTier::Moderate),
            "alto" => Some(StressTier::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for StressTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid stress tier: {}", s))
    }
}

/// Support-session classification, a pure function of the stress tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionTier {
    /// Wellbeing maintenance; low stress
    Preventive,

    /// Self-care techniques plus professional support; moderate stress
    Moderate,

    /// Immediate intervention guidance; high stress
    Critical,
}

impl SessionTier {
    /// Classify a stress level.
    pub fn from_level(stress_level: f64) -> Self {
        StressTier::from_level(stress_level).into()
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionTier::Preventive => "preventiva",
            SessionTier::Moderate => "moderada",
            SessionTier::Critical => "crítica",
        }
    }
}

impl From<StressTier> for SessionTier {
    fn from(tier: StressTier) -> Self {
        match tier {
            StressTier::Low => SessionTier::Preventive,
            StressTier::Moderate => SessionTier::Moderate,
            StressTier::High => SessionTier::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_exact() {
        assert_eq!(StressTier::from_level(0.0), StressTier::Low);
        assert_eq!(StressTier::from_level(3.0), StressTier::Low);
        assert_eq!(StressTier::from_level(3.01), StressTier::Moderate);
        assert_eq!(StressTier::from_level(6.0), StressTier::Moderate);
        assert_eq!(StressTier::from_level(6.01), StressTier::High);
        assert_eq!(StressTier::from_level(10.0), StressTier::High);
    }

    #[test]
    fn test_session_tier_follows_stress_tier() {
        assert_eq!(SessionTier::from_level(2.0), SessionTier::Preventive);
        assert_eq!(SessionTier::from_level(5.5), SessionTier::Moderate);
        assert_eq!(SessionTier::from_level(8.0), SessionTier::Critical);
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!(StressTier::parse("bajo"), Some(StressTier::Low));
        assert_eq!(StressTier::parse("MEDIO"), Some(StressTier::Moderate));
        assert_eq!(StressTier::parse("alto"), Some(StressTier::High));
        assert!(StressTier::parse("extremo").is_none());
    }
}
