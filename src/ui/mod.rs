pub mod auth;
pub mod common;
pub mod contact;
pub mod icon;
pub mod pages;
pub mod particles;
pub mod testimonials;

pub use icon::{Icon, icons};
pub use particles::ParticlesBackground;
