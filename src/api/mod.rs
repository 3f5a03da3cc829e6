pub mod handlers;
pub mod page_extractor;
pub mod routes;

pub use handlers::*;
pub use page_extractor::*;
pub use routes::*;
