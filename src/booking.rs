use gloo::console::log;
use serde::Serialize;

use crate::date::ServiceDate;

pub const BOOKING_ACK: &str =
    "Booking submitted successfully! You will receive a confirmation shortly.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub service_date: ServiceDate,
    pub bike_identifier: String,
    pub contact_name: String,
    pub phone_number: String,
    pub email: String, // optional, empty when not given
}

impl BookingRequest {
    pub fn new(today: ServiceDate) -> Self {
        Self {
            service_date: today,
            bike_identifier: String::new(),
            contact_name: String::new(),
            phone_number: String::new(),
            email: String::new(),
        }
    }

    /// Returns a copy with exactly one field replaced.
    pub fn with(&self, field: BookingField) -> Self {
        let mut next = self.clone();
        match field {
            BookingField::ServiceDate(d) => next.service_date = d,
            BookingField::BikeIdentifier(v) => next.bike_identifier = v,
            BookingField::ContactName(v) => next.contact_name = v,
            BookingField::PhoneNumber(v) => next.phone_number = v,
            BookingField::Email(v) => next.email = v,
        }
        next
    }
}

/// One edit from the booking form.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingField {
    ServiceDate(ServiceDate),
    BikeIdentifier(String),
    ContactName(String),
    PhoneNumber(String),
    Email(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),
    #[error("Could not reach the booking desk: {0}")]
    Network(String),
}

pub fn validate(request: &BookingRequest, earliest: ServiceDate) -> Result<(), BookingError> {
    let required = [
        ("Bike number", &request.bike_identifier),
        ("Name", &request.contact_name),
        ("Phone number", &request.phone_number),
    ];
    for (label, value) in required {
        if value.is_empty() {
            return Err(BookingError::Validation(format!("{label} is required.")));
        }
    }

    let email = request.email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        return Err(BookingError::Validation(format!(
            "\"{email}\" is not a valid email address."
        )));
    }

    if request.service_date < earliest {
        return Err(BookingError::Validation(format!(
            "Service date cannot be earlier than {earliest}."
        )));
    }
    Ok(())
}

// Same bar as the browser's type=email check: something@something.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(' ')
        }
        None => false,
    }
}

/// Where submitted bookings go. Returns the acknowledgment to show the user.
pub trait BookingDesk {
    fn submit(&self, request: &BookingRequest, earliest: ServiceDate) -> Result<String, BookingError>;
}

/// No backend yet: validates, writes the booking to the browser console, and
/// acknowledges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDesk;

impl BookingDesk for ConsoleDesk {
    fn submit(&self, request: &BookingRequest, earliest: ServiceDate) -> Result<String, BookingError> {
        validate(request, earliest)?;
        match serde_json::to_string_pretty(request) {
            Ok(json) => log!(format!("Booking submitted: {json}")),
            Err(e) => log!(format!("Booking submitted (unserializable: {e}): {request:?}")),
        }
        Ok(BOOKING_ACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> ServiceDate {
        ServiceDate::parse(s).unwrap()
    }

    fn filled() -> BookingRequest {
        BookingRequest {
            service_date: day("2026-10-20"),
            bike_identifier: "KA-01-1234".into(),
            contact_name: "Asha".into(),
            phone_number: "(555) 123-4567".into(),
            email: String::new(),
        }
    }

    #[test]
    fn test_new_request_is_empty() {
        let r = BookingRequest::new(day("2026-10-18"));
        assert_eq!(r.service_date, day("2026-10-18"));
        assert!(r.bike_identifier.is_empty());
        assert!(r.contact_name.is_empty());
        assert!(r.phone_number.is_empty());
        assert!(r.email.is_empty());
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let before = filled();

        let after = before.with(BookingField::PhoneNumber("999".into()));
        assert_eq!(after.phone_number, "999");
        assert_eq!(after, BookingRequest { phone_number: "999".into(), ..before.clone() });

        let after = before.with(BookingField::ServiceDate(day("2026-12-01")));
        assert_eq!(after, BookingRequest { service_date: day("2026-12-01"), ..before.clone() });

        let after = before.with(BookingField::Email("a@b.in".into()));
        assert_eq!(after, BookingRequest { email: "a@b.in".into(), ..before.clone() });

        // source untouched
        assert_eq!(before, filled());
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert_eq!(validate(&filled(), day("2026-10-18")), Ok(()));
    }

    #[test]
    fn test_validate_requires_fields() {
        let earliest = day("2026-10-18");
        for r in [
            filled().with(BookingField::BikeIdentifier(String::new())),
            filled().with(BookingField::ContactName(String::new())),
            filled().with(BookingField::PhoneNumber(String::new())),
        ] {
            assert!(matches!(validate(&r, earliest), Err(BookingError::Validation(_))));
        }
    }

    #[test]
    fn test_validate_accepts_whitespace_values() {
        // the form's `required` only refuses an empty string
        let earliest = day("2026-10-18");
        let r = filled()
            .with(BookingField::ContactName(" ".into()))
            .with(BookingField::BikeIdentifier("   ".into()));
        assert_eq!(validate(&r, earliest), Ok(()));
    }

    #[test]
    fn test_validate_email_only_when_given() {
        let earliest = day("2026-10-18");
        let bad = filled().with(BookingField::Email("not-an-email".into()));
        assert!(matches!(validate(&bad, earliest), Err(BookingError::Validation(_))));

        let good = filled().with(BookingField::Email("rider@example.com".into()));
        assert_eq!(validate(&good, earliest), Ok(()));
    }

    #[test]
    fn test_validate_rejects_past_date() {
        let r = filled().with(BookingField::ServiceDate(day("2026-10-17")));
        let err = validate(&r, day("2026-10-18")).unwrap_err();
        assert_eq!(
            err,
            BookingError::Validation("Service date cannot be earlier than 2026-10-18.".into())
        );

        let same_day = filled().with(BookingField::ServiceDate(day("2026-10-18")));
        assert_eq!(validate(&same_day, day("2026-10-18")), Ok(()));
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let v = BookingError::Validation("Name is required.".into());
        let n = BookingError::Network("timeout".into());
        assert_eq!(v.to_string(), "Name is required.");
        assert_eq!(n.to_string(), "Could not reach the booking desk: timeout");
    }

    #[test]
    fn test_request_serializes_for_log() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["service_date"], "2026-10-20");
        assert_eq!(json["bike_identifier"], "KA-01-1234");
    }
}
