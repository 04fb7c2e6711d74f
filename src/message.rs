//! Outbound WhatsApp handoff.
//!
//! On a successful booking (or a contact-form submission) the guest is
//! handed a pre-filled message and a `wa.me` deep link to send it with.
//! Responsibility ends at producing the text and the link; delivery is
//! manual.

use url::form_urlencoded::byte_serialize;

use crate::Amount;
use crate::model::{BookingRecord, ContactMessage};

/// Contact details of the property, used for outbound links and inquiry
/// text.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    /// Number in international format, as accepted by `wa.me` links.
    pub whatsapp: String,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            name: "ACK Mt. Kenya Guest House".to_string(),
            whatsapp: "+254720577442".to_string(),
        }
    }
}

/// Pre-filled confirmation text for a just-created booking.
pub fn booking_confirmation(record: &BookingRecord, deposit: Amount) -> String {
    let requests = record.special_requests.as_deref().unwrap_or("None");
    format!(
        "Hi, I just submitted a booking request.\n\
         \n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Guests: {}\n\
         Meal Plan: {}\n\
         Total Amount: {}\n\
         Deposit Required: {}\n\
         Special Requests: {}",
        record.guest_name,
        record.phone,
        record.email,
        record.check_in,
        record.check_out,
        record.guests,
        record.meal_plan.label(),
        record.total_amount,
        deposit,
        requests,
    )
}

/// Pre-filled inquiry text for a contact-form submission.
pub fn inquiry(property: &Property, contact: &ContactMessage) -> String {
    format!(
        "Hi, I have an inquiry about {}.\n\
         \n\
         Name: {}\n\
         Subject: {}\n\
         \n\
         Message: {}",
        property.name, contact.name, contact.subject, contact.message,
    )
}

/// Deep link opening the given text in a WhatsApp chat with the property.
pub fn whatsapp_link(property: &Property, text: &str) -> String {
    let encoded: String = byte_serialize(text.as_bytes()).collect();
    format!("https://wa.me/{}?text={}", property.whatsapp, encoded)
}
