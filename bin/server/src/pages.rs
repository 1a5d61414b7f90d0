//! Page components rendered inside the root layout's outlet.

pub mod about;
pub mod home;
pub mod not_found;

// Re-export all page components for convenient access
pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
