//! Error types for booking operations.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::RoomId;
use crate::store::StoreError;

/// A request field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GuestName,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    Guests,
    RoomId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::GuestName => "guest name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::CheckIn => "check-in date",
            Field::CheckOut => "check-out date",
            Field::Guests => "guest count",
            Field::RoomId => "room",
        };
        f.write_str(name)
    }
}

fn list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error from [`Engine::create_booking`](super::Engine::create_booking).
#[derive(Debug, Error)]
pub enum BookingError {
    /// The request shape is invalid; carries every offending field.
    #[error("invalid booking request: {}", list(.0))]
    Validation(Vec<Field>),

    /// Another non-cancelled booking occupies part of the requested stay.
    #[error("room {0} is not available from {1} to {2}")]
    Unavailable(RoomId, NaiveDate, NaiveDate),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Error from status updates against a stored record.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no record with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let err = BookingError::Validation(vec![Field::GuestName, Field::CheckOut]);
        assert_eq!(
            err.to_string(),
            "invalid booking request: guest name, check-out date"
        );
    }

    #[test]
    fn unavailable_message_names_room_and_dates() {
        let err = BookingError::Unavailable(
            "2".to_string(),
            "2099-06-10".parse().unwrap(),
            "2099-06-15".parse().unwrap(),
        );
        assert_eq!(
            err.to_string(),
            "room 2 is not available from 2099-06-10 to 2099-06-15"
        );
    }
}
