//! Dimmable lights.

use serde_json::json;

use hamock_domain::entity::{Entity, EntityState};
use hamock_domain::error::MockError;
use hamock_domain::time::Timestamp;

pub(super) fn entities(ts: Timestamp) -> Result<Vec<Entity>, MockError> {
    let living_room = Entity::builder()
        .entity_id("light.living_room")
        .friendly_name("Living Room")
        .state(EntityState::Off)
        .attribute("supported_color_modes", json!(["brightness", "color_temp"]))
        .attribute("brightness", 255)
        .attribute("color_temp", 370)
        .attribute("min_color_temp", 153)
        .attribute("max_color_temp", 500)
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J1")
        .build()?;

    let bedroom = Entity::builder()
        .entity_id("light.bedroom")
        .friendly_name("Bedroom")
        .state(EntityState::Off)
        .attribute("supported_color_modes", json!(["brightness"]))
        .attribute("brightness", 0)
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J2")
        .build()?;

    Ok(vec![living_room, bedroom])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamock_domain::time::now;

    #[test]
    fn should_start_living_room_off_at_full_brightness() {
        let lights = entities(now()).unwrap();
        let living_room = &lights[0];
        assert_eq!(living_room.state, EntityState::Off);
        assert_eq!(living_room.get_attribute("brightness"), Some(&json!(255)));
        assert_eq!(living_room.get_attribute("color_temp"), Some(&json!(370)));
    }

    #[test]
    fn should_support_brightness_only_in_bedroom() {
        let lights = entities(now()).unwrap();
        assert_eq!(
            lights[1].get_attribute("supported_color_modes"),
            Some(&json!(["brightness"]))
        );
    }
}
