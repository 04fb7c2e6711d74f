//! Core domain types for the booking engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Identifier of a room kind in the catalog.
pub type RoomId = String;

/// One of the four catalog tiers determining the nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlan {
    BedOnly,
    Bb,
    HalfBoard,
    FullBoard,
}

impl MealPlan {
    /// Human-readable label used in outbound messages.
    pub fn label(self) -> &'static str {
        match self {
            MealPlan::BedOnly => "Bed Only",
            MealPlan::Bb => "Bed & Breakfast",
            MealPlan::HalfBoard => "Half Board",
            MealPlan::FullBoard => "Full Board",
        }
    }
}

/// Lifecycle state of a booking. Cancellation is a status change, never a
/// removal of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A booking request as collected by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub room_id: RoomId,
    pub meal_plan: MealPlan,
    pub special_requests: Option<String>,
}

/// A persisted booking.
///
/// Only `status` is ever mutated after creation; `total_amount` is fixed at
/// the price computed when the booking was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub room_id: RoomId,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub special_requests: Option<String>,
    pub meal_plan: MealPlan,
    pub status: BookingStatus,
    pub total_amount: Amount,
    pub created_at: DateTime<Utc>,
}

/// What a payment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Deposit,
    Balance,
    Full,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Mpesa,
    Cash,
    Cheque,
    BankTransfer,
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// A payment to record against a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Foreign reference to a booking; not enforced by the store.
    pub booking_id: String,
    pub amount: Amount,
    pub payment_type: PaymentType,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
}

/// A persisted payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub booking_id: String,
    pub amount: Amount,
    pub payment_type: PaymentType,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub status: PaymentStatus,
    /// Set once the payment reaches `completed`.
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A contact-form submission. Not persisted; it only feeds the outbound
/// inquiry message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
