// Landing page sections

/// Brand name used across the page (single source of truth)
pub const BRAND: &str = "Lumina UI";

mod about;
mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod showcase;
mod testimonials;

pub use about::About;
pub use cta::Cta;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use showcase::Showcase;
pub use testimonials::Testimonials;
