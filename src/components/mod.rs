pub mod call_to_action;
pub mod footer;
pub mod info_section;
pub mod navbar;
