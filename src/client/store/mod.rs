pub mod detail_modal;
pub mod time_entry;
pub mod timer_table;
