use serde::{Deserialize, Serialize};

use super::validation::{check_pincode, FieldErrors};

/// Почтовый адрес (клиенты, поставщики, сотрудники)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        [
            &self.line1,
            &self.line2,
            &self.city,
            &self.district,
            &self.state,
            &self.pincode,
        ]
        .iter()
        .all(|part| part.trim().is_empty())
    }

    /// Compact "city, state - pincode" form for table cells
    pub fn short(&self) -> String {
        let place = [self.city.trim(), self.state.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        match (place.is_empty(), self.pincode.trim().is_empty()) {
            (true, true) => String::new(),
            (false, true) => place,
            (true, false) => self.pincode.trim().to_string(),
            (false, false) => format!("{} - {}", place, self.pincode.trim()),
        }
    }

    pub fn validate_into(&self, errors: &mut FieldErrors) {
        check_pincode(errors, "pincode", &self.pincode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short() {
        let address = Address {
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560001".into(),
            ..Default::default()
        };
        assert_eq!(address.short(), "Bengaluru, Karnataka - 560001");
        assert_eq!(Address::default().short(), "");
    }

    #[test]
    fn test_missing_fields_default() {
        let address: Address = serde_json::from_str(r#"{"city":"Pune"}"#).unwrap();
        assert_eq!(address.city, "Pune");
        assert!(address.pincode.is_empty());
    }
}
