pub mod go_home;
pub mod step_panel;
