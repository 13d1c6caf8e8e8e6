use serde::Deserialize;

/// Body of the provider's `availabilities.json` response.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub availabilities: Vec<AvailabilityEntry>,
}

/// One scheduling resource (a day, in practice) grouping zero or more
/// bookable slot timestamps, each an ISO-8601 datetime string.
#[derive(Debug, Deserialize)]
pub struct AvailabilityEntry {
    pub slots: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_response() {
        let body = r#"{
            "availabilities": [
                {"date": "2022-07-03", "slots": ["2022-07-03T10:00:00+02:00"]},
                {"date": "2022-07-04", "slots": []}
            ],
            "total": 1
        }"#;
        let response: AvailabilityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.availabilities.len(), 2);
        assert_eq!(response.availabilities[0].slots.len(), 1);
        assert!(response.availabilities[1].slots.is_empty());
    }

    #[test]
    fn entry_without_slots_field_is_an_error() {
        let body = r#"{"availabilities": [{"date": "2022-07-03"}]}"#;
        assert!(serde_json::from_str::<AvailabilityResponse>(body).is_err());
    }
}
