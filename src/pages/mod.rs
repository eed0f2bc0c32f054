mod home;
mod not_found;
mod visit;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use visit::VisitPage;
