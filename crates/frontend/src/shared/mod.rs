pub mod alert;
pub mod api_utils;
pub mod navigation;
