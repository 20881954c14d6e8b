//! Plain on/off switches.

use hamock_domain::entity::{Entity, EntityState};
use hamock_domain::error::MockError;
use hamock_domain::time::Timestamp;

pub(super) fn entities(ts: Timestamp) -> Result<Vec<Entity>, MockError> {
    let kitchen = Entity::builder()
        .entity_id("switch.kitchen")
        .friendly_name("Kitchen Switch")
        .state(EntityState::Off)
        .timestamp(ts)
        .context_id("01J4A2B3C4D5E6F7G8H9I0J3")
        .build()?;

    Ok(vec![kitchen])
}
