//! Application pages module
//!
//! - Landing page (home) with the auth modal
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
