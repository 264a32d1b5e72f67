//! Wire types of the public postal-code lookup (`api.postalpincode.in`)

use serde::{Deserialize, Serialize};

pub use super::validation::is_valid_pincode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PincodeResponse {
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "PostOffice", default)]
    pub post_office: Option<Vec<PostOffice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostOffice {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "District", default)]
    pub district: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Country", default)]
    pub country: String,
}

/// Fields auto-filled from a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PincodeLocation {
    pub state: String,
    pub district: String,
}

/// The API answers with an array; the first successful entry's first post office wins.
pub fn location_from(responses: &[PincodeResponse]) -> Option<PincodeLocation> {
    let office = responses
        .iter()
        .filter(|r| r.status == "Success")
        .find_map(|r| r.post_office.as_deref().and_then(<[PostOffice]>::first))?;
    Some(PincodeLocation {
        state: office.state.clone(),
        district: office.district.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let body = r#"[{"Message":"Number of pincode(s) found:1","Status":"Success",
            "PostOffice":[{"Name":"Bangalore G.P.O.","District":"Bangalore","State":"Karnataka","Country":"India"}]}]"#;
        let responses: Vec<PincodeResponse> = serde_json::from_str(body).unwrap();
        assert_eq!(
            location_from(&responses),
            Some(PincodeLocation {
                state: "Karnataka".into(),
                district: "Bangalore".into(),
            })
        );
    }

    #[test]
    fn test_error_response() {
        let body = r#"[{"Message":"No records found","Status":"Error","PostOffice":null}]"#;
        let responses: Vec<PincodeResponse> = serde_json::from_str(body).unwrap();
        assert_eq!(location_from(&responses), None);
        assert_eq!(location_from(&[]), None);
    }

    #[test]
    fn test_success_after_error_entry() {
        let body = r#"[{"Message":"No records found","Status":"Error","PostOffice":null},
            {"Message":"","Status":"Success","PostOffice":[]},
            {"Message":"Number of pincode(s) found:1","Status":"Success",
            "PostOffice":[{"Name":"Kochi","District":"Ernakulam","State":"Kerala","Country":"India"}]}]"#;
        let responses: Vec<PincodeResponse> = serde_json::from_str(body).unwrap();
        assert_eq!(
            location_from(&responses),
            Some(PincodeLocation {
                state: "Kerala".into(),
                district: "Ernakulam".into(),
            })
        );
    }
}
