pub mod app;
pub mod event_log;
pub mod gesture_pad;
pub mod status_panel;
