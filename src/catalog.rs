//! Static room catalog with nightly rates per meal plan.

use serde::{Deserialize, Serialize};

use crate::Amount;
use crate::model::{MealPlan, RoomId};

/// Nightly rate applied when a booking references a room the catalog does
/// not know. The presentation layer always supplies a valid room id, so
/// this is a pricing policy rather than an error path.
pub const FALLBACK_NIGHTLY_RATE: Amount = Amount::new(3500);

/// A room kind and its rates under each meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u8,
    pub bed_only: Amount,
    pub bb: Amount,
    pub half_board: Amount,
    pub full_board: Amount,
}

impl Room {
    pub fn rate(&self, plan: MealPlan) -> Amount {
        match plan {
            MealPlan::BedOnly => self.bed_only,
            MealPlan::Bb => self.bb,
            MealPlan::HalfBoard => self.half_board,
            MealPlan::FullBoard => self.full_board,
        }
    }
}

/// The fixed set of room kinds offered by the house.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Nightly rate for the given room under the given meal plan, falling
    /// back to [`FALLBACK_NIGHTLY_RATE`] for unknown room ids.
    pub fn nightly_rate(&self, room_id: &str, plan: MealPlan) -> Amount {
        self.get(room_id)
            .map(|room| room.rate(plan))
            .unwrap_or(FALLBACK_NIGHTLY_RATE)
    }
}

impl Default for RoomCatalog {
    /// The reference catalog: three room kinds.
    fn default() -> Self {
        let room = |id: &str, name: &str, capacity, rates: [i64; 4]| Room {
            id: id.to_string(),
            name: name.to_string(),
            capacity,
            bed_only: Amount::new(rates[0]),
            bb: Amount::new(rates[1]),
            half_board: Amount::new(rates[2]),
            full_board: Amount::new(rates[3]),
        };
        Self::new(vec![
            room("1", "Single Room", 1, [1000, 1200, 2500, 3500]),
            room("2", "Double Room", 2, [1200, 1500, 2800, 4300]),
            room("3", "Double Room + Extra Bed", 3, [2500, 2900, 4300, 6300]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_rooms() {
        let catalog = RoomCatalog::default();
        assert_eq!(catalog.rooms().len(), 3);
        assert_eq!(catalog.get("2").unwrap().name, "Double Room");
        assert_eq!(catalog.get("3").unwrap().capacity, 3);
    }

    #[test]
    fn nightly_rate_looks_up_room_and_plan() {
        let catalog = RoomCatalog::default();
        assert_eq!(catalog.nightly_rate("1", MealPlan::Bb), Amount::new(1200));
        assert_eq!(
            catalog.nightly_rate("2", MealPlan::FullBoard),
            Amount::new(4300)
        );
        assert_eq!(
            catalog.nightly_rate("3", MealPlan::BedOnly),
            Amount::new(2500)
        );
    }

    #[test]
    fn unknown_room_falls_back_to_fixed_rate() {
        let catalog = RoomCatalog::default();
        assert_eq!(
            catalog.nightly_rate("99", MealPlan::BedOnly),
            FALLBACK_NIGHTLY_RATE
        );
        assert_eq!(
            catalog.nightly_rate("99", MealPlan::FullBoard),
            FALLBACK_NIGHTLY_RATE
        );
    }
}
