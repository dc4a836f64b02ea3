//! Checkout form validation
//!
//! Failures are field-attributed and never mutate state; the form is handed
//! back to the customer with messages per field.

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, check_required,
};
use serde::{Deserialize, Serialize};
use shared::models::FulfillmentMethod;
use validator::ValidateEmail;

/// One field-level validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Checkout form as submitted by the customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub fulfillment: FulfillmentMethod,
    // Delivery-only fields
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Validate a checkout form. Empty result means the form is good.
pub fn validate(form: &CheckoutForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(message) = check_required(&form.name, MAX_NAME_LEN) {
        errors.push(FieldError::new("name", message));
    }

    match check_required(&form.email, MAX_EMAIL_LEN) {
        Err(message) => errors.push(FieldError::new("email", message)),
        Ok(()) => {
            if !form.email.validate_email() {
                errors.push(FieldError::new("email", "must be a valid email address"));
            }
        }
    }

    if let Err(message) = check_required(&form.phone, MAX_SHORT_TEXT_LEN) {
        errors.push(FieldError::new("phone", message));
    }

    if form.fulfillment == FulfillmentMethod::Delivery {
        for (field, value) in [
            ("address", &form.address),
            ("city", &form.city),
            ("state", &form.state),
        ] {
            match value.as_deref() {
                Some(v) if !v.trim().is_empty() => {
                    if v.len() > MAX_ADDRESS_LEN {
                        errors.push(FieldError::new(field, "is too long"));
                    }
                }
                _ => errors.push(FieldError::new(field, "is required for delivery")),
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickup_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+34 600 000 000".to_string(),
            fulfillment: FulfillmentMethod::Pickup,
            address: None,
            city: None,
            state: None,
        }
    }

    fn delivery_form() -> CheckoutForm {
        CheckoutForm {
            fulfillment: FulfillmentMethod::Delivery,
            address: Some("12 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            ..pickup_form()
        }
    }

    fn failing_fields(form: &CheckoutForm) -> Vec<String> {
        validate(form).into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_pickup_form_passes() {
        assert!(validate(&pickup_form()).is_empty());
    }

    #[test]
    fn valid_delivery_form_passes() {
        assert!(validate(&delivery_form()).is_empty());
    }

    #[test]
    fn pickup_does_not_require_address_fields() {
        let form = CheckoutForm {
            fulfillment: FulfillmentMethod::Pickup,
            address: None,
            city: None,
            state: None,
            ..pickup_form()
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn missing_city_is_the_only_error() {
        let form = CheckoutForm {
            city: None,
            ..delivery_form()
        };
        assert_eq!(failing_fields(&form), vec!["city"]);
    }

    #[test]
    fn blank_city_counts_as_missing() {
        let form = CheckoutForm {
            city: Some("   ".to_string()),
            ..delivery_form()
        };
        assert_eq!(failing_fields(&form), vec!["city"]);
    }

    #[test]
    fn bad_email_is_field_attributed() {
        let form = CheckoutForm {
            email: "not-an-email".to_string(),
            ..pickup_form()
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert!(errors[0].message.contains("valid email"));
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let form = CheckoutForm {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            fulfillment: FulfillmentMethod::Delivery,
            address: None,
            city: None,
            state: None,
        };
        let fields = failing_fields(&form);
        assert_eq!(fields, vec!["name", "email", "phone", "address", "city", "state"]);
    }
}
