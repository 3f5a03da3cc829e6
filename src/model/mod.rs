pub mod attribute;
pub mod page;
pub mod product;

pub use attribute::*;
pub use page::*;
pub use product::*;
