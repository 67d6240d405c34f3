use super::RoomId;
use serde::{Deserialize, Serialize};

/// Classification of a room; drives its derived capacity and which courses may
/// default into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Standard,
    Lab,
    Art,
    Gym,
    Sped,
    Cafeteria,
    Auditorium,
}

impl RoomType {
    /// Derived max capacity per §3 ("derived min/max capacity per type").
    pub fn default_capacity(self) -> u32 {
        match self {
            RoomType::Standard => 30,
            RoomType::Lab => 24,
            RoomType::Art => 20,
            RoomType::Gym => 60,
            RoomType::Sped => 15,
            RoomType::Cafeteria => 360,
            RoomType::Auditorium => 150,
        }
    }

    /// Derived min capacity; used only to flag obviously mis-sized rooms.
    pub fn default_min_capacity(self) -> u32 {
        match self {
            RoomType::Cafeteria => 60,
            RoomType::Gym => 20,
            RoomType::Auditorium => 40,
            _ => 10,
        }
    }
}

/// A physical room. Capacity is derived from `room_type` unless overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_type: RoomType,
    #[serde(default)]
    pub capacity_override: Option<u32>,
}

impl Room {
    pub fn capacity(&self) -> u32 {
        self.capacity_override
            .unwrap_or_else(|| self.room_type.default_capacity())
    }
}
