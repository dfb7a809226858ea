//! Cast and validation strategies.

use serde::{Deserialize, Serialize};

/// What `cast` does with a value it cannot coerce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CastStrategy {
    /// Return the original value.
    Keep,
    /// Drop the value.
    Drop,
    /// Fail with a type mismatch.
    Throw,
    /// Drop the value; the schema layer may substitute a default.
    #[default]
    DefaultOrDrop,
    /// Keep the value; the schema layer may substitute a default.
    DefaultOrKeep,
}

impl CastStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Drop => "drop",
            Self::Throw => "throw",
            Self::DefaultOrDrop => "defaultOrDrop",
            Self::DefaultOrKeep => "defaultOrKeep",
        }
    }
}

impl std::fmt::Display for CastStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CastStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Self::Keep),
            "drop" => Ok(Self::Drop),
            "throw" => Ok(Self::Throw),
            "defaultOrDrop" => Ok(Self::DefaultOrDrop),
            "defaultOrKeep" => Ok(Self::DefaultOrKeep),
            _ => Err(format!("unknown cast strategy: {s}")),
        }
    }
}

/// How strictly `validate` matches a value against the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    /// The value must already have the declared type.
    #[default]
    Strict,
    /// Values convertible to the declared type are accepted and converted.
    Equal,
}

impl ValidationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Equal => "equal",
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl std::fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ValidationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "equal" | "lenient" => Ok(Self::Equal),
            _ => Err(format!("unknown validation strategy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_strategy_wire_names() {
        for strategy in [
            CastStrategy::Keep,
            CastStrategy::Drop,
            CastStrategy::Throw,
            CastStrategy::DefaultOrDrop,
            CastStrategy::DefaultOrKeep,
        ] {
            assert_eq!(strategy.as_str().parse::<CastStrategy>().unwrap(), strategy);
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{strategy}\""));
        }
    }

    #[test]
    fn test_cast_strategy_default() {
        assert_eq!(CastStrategy::default(), CastStrategy::DefaultOrDrop);
        assert!("DROP".parse::<CastStrategy>().is_err());
    }

    #[test]
    fn test_validation_strategy() {
        assert!(ValidationStrategy::default().is_strict());
        assert_eq!("equal".parse::<ValidationStrategy>().unwrap(), ValidationStrategy::Equal);
        assert_eq!("Lenient".parse::<ValidationStrategy>().unwrap(), ValidationStrategy::Equal);
        let parsed: ValidationStrategy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(parsed, ValidationStrategy::Strict);
    }
}
