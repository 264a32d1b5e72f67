pub mod address;
pub mod dates;
pub mod pincode;
pub mod record;
pub mod reorder;
pub mod status;
pub mod validation;
