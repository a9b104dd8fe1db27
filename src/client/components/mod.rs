pub mod detail_modal;
pub mod eve_clock;
pub mod navbar;
pub mod page;
pub mod search_select;
pub mod time_entry_fields;
pub mod timer_table;
pub mod title;

pub use detail_modal::TimerDetailModal;
pub use eve_clock::EveClock;
pub use navbar::Navbar;
pub use page::Page;
pub use search_select::{RenderSelect, SearchSelect};
pub use time_entry_fields::TimeEntryFields;
pub use timer_table::TimerTable;
pub use title::TimerboardTitleButton;
