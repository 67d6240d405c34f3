use crate::types::{Room, RoomType};

/// Picks a default room for a course's required space. Room-level double
/// booking is not modeled in this design (§3 only constrains period overlap
/// for students and teachers), so the first matching room suffices.
pub fn default_room_for(rooms: &[Room], room_type: RoomType) -> Option<Room> {
    rooms.iter().find(|r| r.room_type == room_type).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;

    #[test]
    fn finds_room_of_matching_type() {
        let rooms = vec![
            Room { id: RoomId("r1".into()), room_type: RoomType::Standard, capacity_override: None },
            Room { id: RoomId("r2".into()), room_type: RoomType::Lab, capacity_override: None },
        ];
        let found = default_room_for(&rooms, RoomType::Lab).unwrap();
        assert_eq!(found.id, RoomId("r2".into()));
    }

    #[test]
    fn returns_none_when_no_room_of_type() {
        let rooms = vec![Room { id: RoomId("r1".into()), room_type: RoomType::Standard, capacity_override: None }];
        assert!(default_room_for(&rooms, RoomType::Gym).is_none());
    }
}
