use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "Name field is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "Age must be a positive integer"))]
    pub age: i32,

    #[validate(length(min = 1, message = "Email field is required"))]
    pub email: String,

    /// Role references to attach. Unknown ids are dropped silently.
    #[serde(default)]
    pub roles: Vec<RoleReferenceValidator>,
}

/// Full-replace update payload, same shape as creation.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[validate(length(min = 1, message = "Name field is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "Age must be a positive integer"))]
    pub age: i32,

    #[validate(length(min = 1, message = "Email field is required"))]
    pub email: String,

    #[serde(default)]
    pub roles: Vec<RoleReferenceValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RoleReferenceValidator {
    pub id: i32,

    #[validate(length(min = 1, message = "Name field is required"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_and_non_positive_age_are_invalid() {
        let payload = CreateUserValidator {
            name: String::new(),
            age: 0,
            email: "a@example.com".to_string(),
            roles: vec![],
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn roles_default_to_empty_when_absent() {
        let payload: CreateUserValidator = serde_json::from_value(serde_json::json!({
            "name": "Alice",
            "age": 30,
            "email": "alice@example.com"
        }))
        .unwrap();
        assert!(payload.roles.is_empty());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn well_formed_payload_passes() {
        let payload = CreateUserValidator {
            name: "Alice".to_string(),
            age: 30,
            email: "alice@example.com".to_string(),
            roles: vec![RoleReferenceValidator {
                id: 2,
                name: "Admin".to_string(),
            }],
        };
        assert!(payload.validate().is_ok());
    }
}
