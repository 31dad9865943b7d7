use super::model::Map;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_map(map: &Map) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if map.rooms.is_empty() {
        errors.push(ValidationError::new("map has no rooms"));
    }

    // Entrance and exit must exist
    if map.room(map.entrance).is_none() {
        errors.push(ValidationError::new(format!(
            "entrance room {} not found among rooms",
            map.entrance
        )));
    }
    if map.room(map.exit).is_none() {
        errors.push(ValidationError::new(format!(
            "exit room {} not found among rooms",
            map.exit
        )));
    }

    for (index, room) in map.rooms.iter().enumerate() {
        if room.number != index + 1 {
            errors.push(ValidationError::new(format!(
                "room at position {} is numbered {}",
                index + 1,
                room.number
            )));
        }

        // Only the entrance and the exit may be dead ends
        let terminal = room.number == map.entrance || room.number == map.exit;
        if room.connections.is_empty() && !terminal {
            errors.push(ValidationError::new(format!(
                "room {} has no doors",
                room.number
            )));
        }

        for &target in &room.connections {
            if map.room(target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room {} has a door to missing room {}",
                    room.number, target
                )));
            } else if target == room.number {
                errors.push(ValidationError::new(format!(
                    "room {} has a door to itself",
                    room.number
                )));
            }
        }
    }

    errors
}
