pub mod create_timer;
pub mod not_found;
pub mod timer_board;

pub use create_timer::CreateTimer;
pub use not_found::NotFound;
pub use timer_board::TimerBoard;
