use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRecord {
    pub date: String,
    pub service_type: String,
    pub cost: String,
}

impl ServiceRecord {
    fn new(date: &str, service_type: &str, cost: &str) -> Self {
        Self {
            date: date.into(),
            service_type: service_type.into(),
            cost: cost.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("Enter a bike number to look up its service history.")]
    MissingIdentifier,
    #[error("No service history found for bike {0}.")]
    NotFound(String),
}

/// Where the lookup modal gets a bike's past services from.
pub trait ServiceHistory {
    fn lookup(&self, bike_identifier: &str) -> Result<Vec<ServiceRecord>, LookupError>;
}

/// Stand-in until the shop has a records backend: every bike gets the same
/// two entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureHistory;

impl ServiceHistory for FixtureHistory {
    fn lookup(&self, bike_identifier: &str) -> Result<Vec<ServiceRecord>, LookupError> {
        if bike_identifier.is_empty() {
            return Err(LookupError::MissingIdentifier);
        }
        Ok(vec![
            ServiceRecord::new("2024-02-15", "General Checkup", "$49"),
            ServiceRecord::new("2023-12-10", "Engine Repair", "$149"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_returns_two_records_for_any_bike() {
        for bike in ["KA-01-1234", "x", "   ", " padded ", "🚲"] {
            let records = FixtureHistory.lookup(bike).unwrap();
            assert_eq!(records.len(), 2);
            assert_eq!(records[0], ServiceRecord::new("2024-02-15", "General Checkup", "$49"));
            assert_eq!(records[1], ServiceRecord::new("2023-12-10", "Engine Repair", "$149"));
        }
    }

    #[test]
    fn test_fixture_rejects_empty_identifier() {
        assert_eq!(FixtureHistory.lookup(""), Err(LookupError::MissingIdentifier));
    }

    #[test]
    fn test_whitespace_identifier_is_not_empty() {
        assert_eq!(FixtureHistory.lookup("   ").map(|r| r.len()), Ok(2));
    }

    #[test]
    fn test_not_found_message_names_bike() {
        let e = LookupError::NotFound("KA-99".into());
        assert_eq!(e.to_string(), "No service history found for bike KA-99.");
    }
}
