pub mod api;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod load_state;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod request_seq;
