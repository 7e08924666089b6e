mod dashboard;
pub use dashboard::*;

mod login;
pub use login::*;

mod rc;
pub use rc::*;
