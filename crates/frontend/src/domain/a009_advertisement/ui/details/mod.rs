mod model;
mod view;
mod view_model;

pub use model::AdvertisementService;
pub use view::AdvertisementDetails;
pub use view_model::AdvertisementDraft;
