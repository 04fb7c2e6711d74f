//! Booking availability and pricing engine.
//!
//! The engine owns a [`RecordStore`] and a [`RoomCatalog`] and implements
//! the booking workflow: availability checks, nights and price computation,
//! booking creation, status updates, and payment recording. Every mutation
//! is a read-modify-write of a whole collection; the store has no row-level
//! update, so at most one logical writer is assumed (see [`crate::store`]).

use chrono::{Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::Amount;
use crate::catalog::RoomCatalog;
use crate::model::{
    BookingRecord, BookingRequest, BookingStatus, MealPlan, PaymentMethod, PaymentRecord,
    PaymentRequest, PaymentStatus,
};
use crate::store::{Collection, RecordStore, StoreError};

mod error;
pub use error::{BookingError, Field, UpdateError};

/// Milliseconds in one day, the unit of the nights calculation.
const DAY_MS: i64 = 86_400_000;

/// Number of nights covered by `[check_in, check_out)`.
///
/// The difference is taken in milliseconds and rounded up, so a partial day
/// counts as a full night. With date-only inputs this is the exact day
/// difference.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    // Equivalent to `.div_ceil(DAY_MS)`, which is unstable for signed
    // integers; with a positive divisor, round up iff there is a positive
    // remainder.
    let ms = check_out
        .signed_duration_since(check_in)
        .num_milliseconds();
    let q = ms / DAY_MS;
    if ms % DAY_MS > 0 { q + 1 } else { q }
}

/// Whether `[check_in, check_out)` collides with an existing interval
/// `[b_in, b_out)`.
///
/// Three explicit conditions rather than the canonical two-comparison
/// interval test. The behavior at exact checkout/check-in boundaries
/// follows from these literal comparisons and is pinned by tests; keep all
/// three as written.
fn overlaps(check_in: NaiveDate, check_out: NaiveDate, b_in: NaiveDate, b_out: NaiveDate) -> bool {
    (check_in <= b_in && check_out > b_in)
        || (check_in < b_out && check_out >= b_out)
        || (check_in >= b_in && check_out <= b_out)
}

/// Whether the room is free for `[check_in, check_out)` against the given
/// bookings. Cancelled bookings and bookings for other rooms never block.
pub fn is_available(
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    existing: &[BookingRecord],
) -> bool {
    !existing.iter().any(|b| {
        b.room_id == room_id
            && b.status != BookingStatus::Cancelled
            && overlaps(check_in, check_out, b.check_in, b.check_out)
    })
}

/// Price breakdown for a prospective stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub nights: i64,
    pub total: Amount,
    pub deposit: Amount,
}

/// The booking engine.
pub struct Engine<S> {
    store: S,
    catalog: RoomCatalog,
}

/// Public API
impl<S: RecordStore> Engine<S> {
    /// Engine over the given store with the reference catalog.
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, RoomCatalog::default())
    }

    pub fn with_catalog(store: S, catalog: RoomCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// All stored bookings, newest first.
    pub fn bookings(&self) -> Vec<BookingRecord> {
        let mut bookings: Vec<BookingRecord> = self.load_or_empty(Collection::Bookings);
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings
    }

    /// Whether the room is free for the given stay.
    pub fn check_availability(
        &self,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        let existing: Vec<BookingRecord> = self.load_or_empty(Collection::Bookings);
        is_available(room_id, check_in, check_out, &existing)
    }

    /// Nights, total, and required deposit for a prospective stay, as shown
    /// to the guest before confirmation.
    pub fn quote(
        &self,
        room_id: &str,
        meal_plan: MealPlan,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Quote {
        let nights = nights(check_in, check_out);
        let total = self.catalog.nightly_rate(room_id, meal_plan) * nights;
        Quote {
            nights,
            total,
            deposit: total.deposit(),
        }
    }

    /// Validate a request, check availability, price the stay, and append
    /// the new booking to the store.
    pub fn create_booking(&self, request: BookingRequest) -> Result<BookingRecord, BookingError> {
        let today = Local::now().date_naive();
        if let Err(fields) = validate(&request, today) {
            info!(room = %request.room_id, "booking rejected: invalid request");
            return Err(BookingError::Validation(fields));
        }

        let mut bookings: Vec<BookingRecord> = self.load_or_empty(Collection::Bookings);
        if !is_available(&request.room_id, request.check_in, request.check_out, &bookings) {
            info!(
                room = %request.room_id,
                check_in = %request.check_in,
                check_out = %request.check_out,
                "booking rejected: dates taken"
            );
            return Err(BookingError::Unavailable(
                request.room_id,
                request.check_in,
                request.check_out,
            ));
        }

        let nights = nights(request.check_in, request.check_out);
        let total = self.catalog.nightly_rate(&request.room_id, request.meal_plan) * nights;

        let record = BookingRecord {
            id: format!("booking_{}", Uuid::new_v4().simple()),
            room_id: request.room_id,
            guest_name: request.guest_name,
            email: request.email,
            phone: request.phone,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            special_requests: request.special_requests,
            meal_plan: request.meal_plan,
            status: BookingStatus::Pending,
            total_amount: total,
            created_at: Utc::now(),
        };

        bookings.push(record.clone());
        self.store.save_all(Collection::Bookings, &bookings)?;

        info!(
            booking = %record.id,
            room = %record.room_id,
            nights,
            total = %record.total_amount,
            "booking created"
        );
        Ok(record)
    }

    /// Replace the status of the booking with the given id.
    ///
    /// Any status may move to any other; cancellation is a status change,
    /// never a removal. An unknown id leaves the stored collection
    /// untouched.
    pub fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), UpdateError> {
        let mut bookings: Vec<BookingRecord> = self.load_or_empty(Collection::Bookings);
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| UpdateError::NotFound(id.to_string()))?;
        booking.status = status;
        self.store.save_all(Collection::Bookings, &bookings)?;

        info!(booking = %id, status = ?status, "booking status updated");
        Ok(())
    }

    /// Record a payment against a booking.
    ///
    /// Cash starts `pending` until manually confirmed; every other method
    /// is self-evidencing and starts `completed` with `paid_at` stamped.
    pub fn record_payment(&self, request: PaymentRequest) -> Result<PaymentRecord, StoreError> {
        let mut payments: Vec<PaymentRecord> = self.load_or_empty(Collection::Payments);

        let now = Utc::now();
        let status = if request.payment_method == PaymentMethod::Cash {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Completed
        };
        let record = PaymentRecord {
            id: format!("payment_{}", Uuid::new_v4().simple()),
            booking_id: request.booking_id,
            amount: request.amount,
            payment_type: request.payment_type,
            payment_method: request.payment_method,
            payment_reference: request.payment_reference,
            status,
            paid_at: (status == PaymentStatus::Completed).then_some(now),
            created_at: now,
            updated_at: now,
        };

        payments.push(record.clone());
        self.store.save_all(Collection::Payments, &payments)?;

        info!(
            payment = %record.id,
            booking = %record.booking_id,
            amount = %record.amount,
            status = ?record.status,
            "payment recorded"
        );
        Ok(record)
    }

    /// Payments recorded against the given booking, newest first.
    pub fn payments_for_booking(&self, booking_id: &str) -> Vec<PaymentRecord> {
        let mut payments: Vec<PaymentRecord> = self.load_or_empty(Collection::Payments);
        payments.retain(|p| p.booking_id == booking_id);
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        payments
    }

    /// Replace the status of the payment with the given id. Moving to
    /// `completed` stamps `paid_at` the first time; `updated_at` is always
    /// refreshed.
    pub fn update_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
    ) -> Result<(), UpdateError> {
        let mut payments: Vec<PaymentRecord> = self.load_or_empty(Collection::Payments);
        let payment = payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| UpdateError::NotFound(id.to_string()))?;
        payment.status = status;
        if status == PaymentStatus::Completed && payment.paid_at.is_none() {
            payment.paid_at = Some(Utc::now());
        }
        payment.updated_at = Utc::now();
        self.store.save_all(Collection::Payments, &payments)?;

        info!(payment = %id, status = ?status, "payment status updated");
        Ok(())
    }
}

/// Private API
impl<S: RecordStore> Engine<S> {
    /// Load a collection, degrading to empty when the read fails.
    ///
    /// The presentation layer must keep working against a corrupted slot,
    /// so a failed read behaves like "no records yet". Write failures are
    /// never swallowed.
    fn load_or_empty<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        match self.store.load_all(collection) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    collection = collection.key(),
                    error = %e,
                    "failed to load records, treating collection as empty"
                );
                Vec::new()
            }
        }
    }
}

/// Check request shape: non-empty required fields, guest count within the
/// house limit, check-in not in the past, check-out after check-in.
fn validate(request: &BookingRequest, today: NaiveDate) -> Result<(), Vec<Field>> {
    let mut fields = Vec::new();
    if request.guest_name.trim().is_empty() {
        fields.push(Field::GuestName);
    }
    if request.email.trim().is_empty() {
        fields.push(Field::Email);
    }
    if request.phone.trim().is_empty() {
        fields.push(Field::Phone);
    }
    if request.room_id.trim().is_empty() {
        fields.push(Field::RoomId);
    }
    if !(1..=4).contains(&request.guests) {
        fields.push(Field::Guests);
    }
    if request.check_in < today {
        fields.push(Field::CheckIn);
    }
    if request.check_out <= request.check_in {
        fields.push(Field::CheckOut);
    }
    if fields.is_empty() { Ok(()) } else { Err(fields) }
}
