use serde::{Deserialize, Serialize};

use super::record::Record;
use super::validation::{ValidationError, Violation, validate_phone, validate_required};

/// A customer record.
///
/// The string attributes are bound to form controls through the customer
/// form's binding table; `division_id` is committed through the cascading
/// country/division selector instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub phone: String,
    pub division_id: u64,
}

impl Record for Customer {
    fn id(&self) -> u64 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        violations.extend(validate_required("name", &self.name));
        violations.extend(validate_required("address", &self.address));
        violations.extend(validate_required("postal_code", &self.postal_code));
        match validate_required("phone", &self.phone) {
            Some(violation) => violations.push(violation),
            None => violations.extend(validate_phone(&self.phone)),
        }
        if self.division_id == 0 {
            violations.push(Violation::new("division_id", "a division must be selected"));
        }
        ValidationError::collect(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_customer() -> Customer {
        Customer {
            id: 12,
            name: "Northwind Traders".to_string(),
            address: "90 Sparks St".to_string(),
            postal_code: "K1P 5B4".to_string(),
            phone: "613-555-0195".to_string(),
            division_id: 7,
        }
    }

    #[test]
    fn valid_customer() {
        assert_eq!(make_customer().validate(), Ok(()));
    }

    #[test]
    fn default_customer_is_unpersisted() {
        assert_eq!(Record::id(&Customer::default()), 0);
    }

    #[test]
    fn empty_name_rejected() {
        let customer = Customer {
            name: String::new(),
            ..make_customer()
        };
        let err = customer.validate().unwrap_err();
        assert!(err.concerns("name"));
        assert!(!err.concerns("phone"));
    }

    #[test]
    fn bad_phone_rejected() {
        let customer = Customer {
            phone: "not a phone".to_string(),
            ..make_customer()
        };
        assert!(customer.validate().unwrap_err().concerns("phone"));
    }

    #[test]
    fn empty_phone_reports_required_not_format() {
        let customer = Customer {
            phone: String::new(),
            ..make_customer()
        };
        let err = customer.validate().unwrap_err();
        let messages: Vec<&str> = err
            .violations
            .iter()
            .filter(|v| v.attribute == "phone")
            .map(|v| v.message.as_str())
            .collect();
        assert_eq!(messages, vec!["must not be empty"]);
    }

    #[test]
    fn unselected_division_rejected() {
        let customer = Customer {
            division_id: 0,
            ..make_customer()
        };
        assert!(customer.validate().unwrap_err().concerns("division_id"));
    }

    #[test]
    fn all_violations_reported_at_once() {
        let err = Customer::default().validate().unwrap_err();
        for attribute in ["name", "address", "postal_code", "phone", "division_id"] {
            assert!(err.concerns(attribute), "missing violation for {attribute}");
        }
    }

    #[test]
    fn serde_round_trip() {
        let customer = make_customer();
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, deserialized);
    }
}
