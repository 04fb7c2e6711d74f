pub mod amount;
pub mod catalog;
pub mod engine;
pub mod message;
pub mod model;
pub mod store;

pub use amount::Amount;
pub use catalog::RoomCatalog;
pub use engine::Engine;
pub use model::{BookingRecord, BookingRequest, MealPlan, PaymentRecord, PaymentRequest};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
