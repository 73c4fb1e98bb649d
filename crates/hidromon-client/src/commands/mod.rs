pub mod history;
pub mod parameters;
