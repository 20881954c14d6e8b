//! Read-only sensors. Service calls never target these, but nothing stops a
//! client from trying.

use hamock_domain::entity::Entity;
use hamock_domain::error::MockError;
use hamock_domain::time::Timestamp;

pub(super) fn entities(ts: Timestamp) -> Result<Vec<Entity>, MockError> {
    let temperature = Entity::builder()
        .entity_id("sensor.temperature_living")
        .friendly_name("Living Room Temperature")
        .state("22.5")
        .attribute("unit_of_measurement", "\u{b0}C")
        .attribute("device_class", "temperature")
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J4")
        .build()?;

    let humidity = Entity::builder()
        .entity_id("sensor.humidity_living")
        .friendly_name("Living Room Humidity")
        .state("45")
        .attribute("unit_of_measurement", "%")
        .attribute("device_class", "humidity")
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J5")
        .build()?;

    let motion = Entity::builder()
        .entity_id("sensor.motion_detector")
        .friendly_name("Motion Detector")
        .state("off")
        .attribute("device_class", "motion")
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J6")
        .build()?;

    Ok(vec![temperature, humidity, motion])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamock_domain::time::now;

    #[test]
    fn should_report_readings_as_strings() {
        let sensors = entities(now()).unwrap();
        let states: Vec<&str> = sensors.iter().map(|e| e.state.as_str()).collect();
        assert_eq!(states, ["22.5", "45", "off"]);
    }
}
