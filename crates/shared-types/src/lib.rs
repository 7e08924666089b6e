pub mod dashboard;
pub mod error;
pub mod paging;
pub mod rc;

pub use dashboard::*;
pub use error::*;
pub use paging::*;
pub use rc::*;
