pub mod get_rc_modal;
pub mod header;
