mod author;
pub use author::Author;

mod home;
pub use home::Home;
