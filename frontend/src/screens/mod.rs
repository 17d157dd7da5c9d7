mod book;
mod contact;
mod home;
mod report;

pub use book::BookScreen;
pub use contact::ContactScreen;
pub use home::HomeScreen;
pub use report::ReportScreen;
