//! Автозаполнение штата и района по индексу (PIN code).

use async_trait::async_trait;
use contracts::shared::address::Address;
use contracts::shared::pincode::{is_valid_pincode, location_from, PincodeLocation, PincodeResponse};

use crate::shared::api_utils::{join_url, path_segment};
use crate::shared::form::{FormDraft, FormState};
use crate::shared::http::{self, ApiError};
use crate::shared::state::StateHandle;

#[async_trait(?Send)]
pub trait PincodeLookup {
    async fn lookup(&self, pincode: &str) -> Result<Vec<PincodeResponse>, ApiError>;
}

/// `GET {base}/pincode/{code}` on the public postal API.
#[derive(Debug, Clone)]
pub struct PostalPincodeApi {
    base_url: String,
}

impl PostalPincodeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl PincodeLookup for PostalPincodeApi {
    async fn lookup(&self, pincode: &str) -> Result<Vec<PincodeResponse>, ApiError> {
        let url = join_url(&self.base_url, &format!("/pincode/{}", path_segment(pincode)));
        http::get_json(&url).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Line1,
    Line2,
    City,
    District,
    State,
    Pincode,
    Country,
}

impl AddressField {
    pub fn slot(self, address: &mut Address) -> &mut String {
        match self {
            AddressField::Line1 => &mut address.line1,
            AddressField::Line2 => &mut address.line2,
            AddressField::City => &mut address.city,
            AddressField::District => &mut address.district,
            AddressField::State => &mut address.state,
            AddressField::Pincode => &mut address.pincode,
            AddressField::Country => &mut address.country,
        }
    }

    pub fn get(self, address: &Address) -> &str {
        match self {
            AddressField::Line1 => &address.line1,
            AddressField::Line2 => &address.line2,
            AddressField::City => &address.city,
            AddressField::District => &address.district,
            AddressField::State => &address.state,
            AddressField::Pincode => &address.pincode,
            AddressField::Country => &address.country,
        }
    }
}

/// Decides when a lookup is due: the value became six digits and differs from the last code asked for.
#[derive(Debug, Clone, Default)]
pub struct PincodeWatcher {
    last_requested: Option<String>,
}

impl PincodeWatcher {
    pub fn on_input(&mut self, value: &str) -> Option<String> {
        let code = value.trim();
        if !is_valid_pincode(code) {
            self.last_requested = None;
            return None;
        }
        if self.last_requested.as_deref() == Some(code) {
            return None;
        }
        self.last_requested = Some(code.to_string());
        Some(code.to_string())
    }
}

/// Looks `code` up; failures are only logged.
pub async fn resolve_pincode<L: PincodeLookup + ?Sized>(lookup: &L, code: &str) -> Option<PincodeLocation> {
    match lookup.lookup(code).await {
        Ok(responses) => {
            let location = location_from(&responses);
            if location.is_none() {
                log::debug!("pincode {} not found", code);
            }
            location
        }
        Err(e) => {
            log::warn!("pincode lookup for {} failed: {}", code, e);
            None
        }
    }
}

/// Fills state and district unless the user has changed the pincode meanwhile.
pub fn apply_location(address: &mut Address, code: &str, location: PincodeLocation) -> bool {
    if address.pincode.trim() != code {
        return false;
    }
    address.state = location.state;
    address.district = location.district;
    true
}

pub async fn autofill_address<D, H, L>(
    form: &H,
    lookup: &L,
    code: &str,
    address: fn(&mut D) -> &mut Address,
) -> bool
where
    D: FormDraft,
    H: StateHandle<FormState<D>>,
    L: PincodeLookup + ?Sized,
{
    let Some(location) = resolve_pincode(lookup, code).await else {
        return false;
    };
    form.update_with(|f| apply_location(address(&mut f.draft), code, location))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{shared, FakePincodeLookup};
    use contracts::domain::a001_customer::CustomerDto;
    use contracts::shared::pincode::PostOffice;

    fn karnataka() -> Vec<PincodeResponse> {
        vec![PincodeResponse {
            status: "Success".into(),
            message: Some("Number of pincode(s) found:1".into()),
            post_office: Some(vec![PostOffice {
                name: "Bangalore G.P.O.".into(),
                district: "Bangalore".into(),
                state: "Karnataka".into(),
                country: "India".into(),
            }]),
        }]
    }

    fn customer_address(d: &mut CustomerDto) -> &mut Address {
        &mut d.address
    }

    #[test]
    fn test_watcher_fires_once_per_code() {
        let mut watcher = PincodeWatcher::default();
        let due: Vec<String> = ["5", "56", "560", "5600", "56000", "560001", "560001"]
            .into_iter()
            .filter_map(|v| watcher.on_input(v))
            .collect();
        assert_eq!(due, vec!["560001".to_string()]);

        // editing away and back asks again
        assert_eq!(watcher.on_input("56000"), None);
        assert_eq!(watcher.on_input("560001"), Some("560001".into()));
        assert_eq!(watcher.on_input("56000a"), None);
    }

    #[tokio::test]
    async fn test_autofill_state_and_district() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        let lookup = FakePincodeLookup::new(Ok(karnataka()));
        let mut watcher = PincodeWatcher::default();

        for value in ["5", "56", "560", "5600", "56000", "560001"] {
            form.borrow_mut().edit(|d| d.address.pincode = value.into());
            if let Some(code) = watcher.on_input(value) {
                autofill_address(&form, &lookup, &code, customer_address).await;
            }
        }

        assert_eq!(lookup.calls(), 1);
        assert_eq!(lookup.codes(), vec!["560001".to_string()]);
        let address = form.borrow().draft.address.clone();
        assert_eq!(address.state, "Karnataka");
        assert_eq!(address.district, "Bangalore");
    }

    #[tokio::test]
    async fn test_failure_leaves_fields() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        form.borrow_mut().edit(|d| {
            d.address.pincode = "560001".into();
            d.address.state = "Typed".into();
        });
        let lookup = FakePincodeLookup::new(Err(ApiError::Network("offline".into())));

        assert!(!autofill_address(&form, &lookup, "560001", customer_address).await);
        assert_eq!(form.borrow().draft.address.state, "Typed");

        let not_found = FakePincodeLookup::new(Ok(vec![PincodeResponse {
            status: "Error".into(),
            message: Some("No records found".into()),
            post_office: None,
        }]));
        assert!(!autofill_address(&form, &not_found, "560001", customer_address).await);
        assert_eq!(form.borrow().draft.address.district, "");
    }

    #[tokio::test]
    async fn test_autofill_skips_error_entries() {
        let form = shared(FormState::new(CustomerDto::default()));
        form.borrow_mut().open_create();
        form.borrow_mut().edit(|d| d.address.pincode = "560001".into());
        let mut responses = vec![PincodeResponse {
            status: "Error".into(),
            message: Some("No records found".into()),
            post_office: None,
        }];
        responses.extend(karnataka());
        let lookup = FakePincodeLookup::new(Ok(responses));

        assert!(autofill_address(&form, &lookup, "560001", customer_address).await);
        assert_eq!(form.borrow().draft.address.state, "Karnataka");
    }

    #[test]
    fn test_late_response_for_changed_code_is_ignored() {
        let mut address = Address {
            pincode: "110001".into(),
            ..Default::default()
        };
        let applied = apply_location(
            &mut address,
            "560001",
            PincodeLocation {
                state: "Karnataka".into(),
                district: "Bangalore".into(),
            },
        );
        assert!(!applied);
        assert!(address.state.is_empty());
    }
}
