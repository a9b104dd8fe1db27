pub mod columns;
pub mod countdown;
pub mod fetch;
pub mod ticker;
