// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod pagination;
pub mod skeleton;

// Primitive wrappers
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

// Re-exports for convenience
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use pagination::*;
pub use skeleton::*;
pub use toast::*;
