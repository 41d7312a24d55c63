pub mod banner;
pub mod help_popup;
pub mod progress_panel;
pub mod session_form;
pub mod session_list;
pub mod status_bar;
pub mod suggestion_panel;
pub mod timer_panel;
