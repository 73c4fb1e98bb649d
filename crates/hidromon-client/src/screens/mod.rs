pub mod history;
pub mod home;

pub use history::HistoryScreen;
pub use home::{HomeScreen, HomeView};
