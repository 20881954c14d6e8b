//! Structural validation of incoming service calls.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::service::ServiceCall;

/// Key of the target entity inside the service payload.
pub const ENTITY_ID: &str = "entity_id";

/// Turn a raw `(domain, service, payload)` triple into a [`ServiceCall`].
///
/// An absent payload is treated as an empty object. Validation runs in two
/// steps: the payload must be a JSON object, then it must carry a non-empty
/// string `entity_id`. The entity is not looked up.
///
/// # Errors
///
/// - [`ValidationError::InvalidServiceData`] when the payload is not an object.
/// - [`ValidationError::MissingEntityId`] when `entity_id` is missing, not a
///   string, or empty.
pub fn validate_service_call(
    domain: impl Into<String>,
    service: impl Into<String>,
    payload: Option<Value>,
) -> Result<ServiceCall, ValidationError> {
    let service_data = match payload {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ValidationError::InvalidServiceData {
                received: json_kind(&other),
            });
        }
    };

    let entity_id = match service_data.get(ENTITY_ID) {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(ValidationError::MissingEntityId),
    };

    Ok(ServiceCall::new(
        domain.into(),
        service.into(),
        entity_id,
        service_data,
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_accept_payload_with_entity_id() {
        let call = validate_service_call(
            "light",
            "turn_on",
            Some(json!({"entity_id": "light.living_room", "brightness": 200})),
        )
        .unwrap();

        assert_eq!(call.domain(), "light");
        assert_eq!(call.service(), "turn_on");
        assert_eq!(call.entity_id(), "light.living_room");
        assert_eq!(call.field("brightness"), Some(&json!(200)));
    }

    #[test]
    fn should_accept_unknown_entity_and_service() {
        let call = validate_service_call(
            "media_player",
            "play",
            Some(json!({"entity_id": "media_player.speaker", "volume_level": 0.5})),
        )
        .unwrap();
        assert_eq!(call.entity_id(), "media_player.speaker");
    }

    #[test]
    fn should_reject_absent_payload_for_missing_entity_id() {
        let result = validate_service_call("light", "turn_on", None);
        assert_eq!(result, Err(ValidationError::MissingEntityId));
    }

    #[test]
    fn should_reject_payload_without_entity_id() {
        let result = validate_service_call("switch", "turn_off", Some(json!({"invalid": "data"})));
        assert_eq!(result, Err(ValidationError::MissingEntityId));
    }

    #[test]
    fn should_reject_empty_entity_id() {
        let result = validate_service_call("light", "turn_on", Some(json!({"entity_id": ""})));
        assert_eq!(result, Err(ValidationError::MissingEntityId));
    }

    #[test]
    fn should_reject_non_string_entity_id() {
        for bad in [json!(42), json!(null), json!(["light.bedroom"]), json!(true)] {
            let result = validate_service_call("light", "turn_on", Some(json!({"entity_id": bad})));
            assert_eq!(result, Err(ValidationError::MissingEntityId));
        }
    }

    #[test]
    fn should_reject_non_object_payload_before_checking_entity_id() {
        let result = validate_service_call("light", "turn_on", Some(json!(["light.bedroom"])));
        assert_eq!(
            result,
            Err(ValidationError::InvalidServiceData { received: "array" })
        );
    }

    #[test]
    fn should_reject_null_payload() {
        let result = validate_service_call("light", "turn_on", Some(Value::Null));
        assert_eq!(
            result,
            Err(ValidationError::InvalidServiceData { received: "null" })
        );
    }
}
