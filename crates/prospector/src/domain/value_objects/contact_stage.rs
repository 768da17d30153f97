//! ContactStage - Sales pipeline position of a contact

use serde::{Deserialize, Serialize};

/// Pipeline stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStage {
    #[default]
    Prospect,
    Engaged,
    Qualified,
    Opportunity,
}

impl std::fmt::Display for ContactStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStage::Prospect => write!(f, "prospect"),
            ContactStage::Engaged => write!(f, "engaged"),
            ContactStage::Qualified => write!(f, "qualified"),
            ContactStage::Opportunity => write!(f, "opportunity"),
        }
    }
}

impl std::str::FromStr for ContactStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prospect" => Ok(ContactStage::Prospect),
            "engaged" => Ok(ContactStage::Engaged),
            "qualified" => Ok(ContactStage::Qualified),
            "opportunity" => Ok(ContactStage::Opportunity),
            _ => Err(format!("Unknown contact stage: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_prospect() {
        assert_eq!(ContactStage::default(), ContactStage::Prospect);
    }

    #[test]
    fn test_display_parses_back() {
        for stage in [
            ContactStage::Prospect,
            ContactStage::Engaged,
            ContactStage::Qualified,
            ContactStage::Opportunity,
        ] {
            assert_eq!(stage.to_string().parse::<ContactStage>(), Ok(stage));
        }
        assert_eq!("Qualified".parse::<ContactStage>(), Ok(ContactStage::Qualified));
        assert!("closed-won".parse::<ContactStage>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ContactStage::Opportunity).unwrap();
        assert_eq!(json, "\"opportunity\"");

        let stage: ContactStage = serde_json::from_str("\"engaged\"").unwrap();
        assert_eq!(stage, ContactStage::Engaged);
    }
}
