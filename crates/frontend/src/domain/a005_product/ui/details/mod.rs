mod model;
mod view;
mod view_model;

pub use model::{category_label, load_category_options, product_service, CategoryOption, ProductService};
pub use view::ProductDetails;
