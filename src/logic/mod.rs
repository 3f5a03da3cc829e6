pub mod fetch;
pub mod flatten;
pub mod index;
pub mod listing;
pub mod paginate;
pub mod resolve;

pub use fetch::*;
pub use flatten::*;
pub use index::*;
pub use listing::*;
pub use paginate::*;
pub use resolve::*;
