use crate::model::id::RoomId;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub floor: String,
    pub capacity: i32,
    pub is_active: bool,
}

/// Ordering key for floor labels. Below-ground floors come first, then
/// ground/above floors, each group numerically ascending. Labels that do not
/// parse sort after everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FloorKey(u8, i64);

pub fn floor_key(label: &str) -> FloorKey {
    let upper = label.trim().to_ascii_uppercase();
    if let Some(rest) = upper.strip_prefix('B') {
        if let Ok(level) = rest.trim_end_matches('F').parse::<i64>() {
            if level > 0 {
                return FloorKey(0, level);
            }
        }
    }
    if let Ok(level) = upper.trim_end_matches('F').parse::<i64>() {
        return FloorKey(1, level);
    }
    FloorKey(2, 0)
}

/// Stable display order for room listings: floor, then name, then the raw
/// floor label as a final tie-break between unparseable labels.
pub fn sort_rooms(rooms: &mut [Room]) {
    rooms.sort_by(compare_rooms);
}

fn compare_rooms(a: &Room, b: &Room) -> Ordering {
    floor_key(&a.floor)
        .cmp(&floor_key(&b.floor))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.floor.cmp(&b.floor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, floor: &str) -> Room {
        Room {
            room_id: RoomId::new(),
            name: name.into(),
            floor: floor.into(),
            capacity: 6,
            is_active: true,
        }
    }

    #[test]
    fn basement_floors_sort_before_ground_floors() {
        assert!(floor_key("B1") < floor_key("1F"));
        assert!(floor_key("B2F") < floor_key("1"));
    }

    #[test]
    fn floors_within_a_group_sort_numerically() {
        assert!(floor_key("B1") < floor_key("B2"));
        assert!(floor_key("2F") < floor_key("10F"));
        assert!(floor_key("3") < floor_key("12F"));
    }

    #[test]
    fn unrecognized_labels_sort_last() {
        assert!(floor_key("12F") < floor_key("Annex"));
        assert!(floor_key("B1") < floor_key(""));
    }

    #[test]
    fn rooms_order_by_floor_then_name() {
        let mut rooms = vec![
            room("Sakura", "2F"),
            room("Ume", "B1"),
            room("Kiri", "2F"),
            room("Fuji", "1F"),
        ];
        sort_rooms(&mut rooms);
        let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ume", "Fuji", "Kiri", "Sakura"]);
    }
}
