use serde::{Deserialize, Serialize};

/// Статус записи справочника
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 2] = [RecordStatus::Active, RecordStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn from_str_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("inactive") {
            RecordStatus::Inactive
        } else {
            RecordStatus::Active
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Inactive).unwrap(),
            "\"Inactive\""
        );
        let parsed: RecordStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(parsed, RecordStatus::Active);
    }

    #[test]
    fn test_from_str_lossy() {
        assert_eq!(RecordStatus::from_str_lossy("INACTIVE"), RecordStatus::Inactive);
        assert_eq!(RecordStatus::from_str_lossy("whatever"), RecordStatus::Active);
    }
}
