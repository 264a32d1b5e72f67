mod model;
mod view;
mod view_model;

pub use model::{category_service, CategoryService};
pub use view::ProductCategoryDetails;
