pub mod bar_chart;
pub mod error_state;
pub mod loading_state;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
