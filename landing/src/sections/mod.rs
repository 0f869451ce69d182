// Landing page sections
// Developed by The Healthdex Team (c)2025

/// Contact address used across the landing page (single source of truth)
pub const CONTACT_EMAIL: &str = "hello@healthdex.io";

mod certifications;
mod contact;
mod footer;
mod hero;
mod nav;
mod partners;
mod problem;
mod roi_calculator;
mod stats;
mod use_cases;

pub use certifications::Certifications;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use partners::Partners;
pub use problem::Problem;
pub use roi_calculator::RoiCalculator;
pub use stats::Stats;
pub use use_cases::UseCases;
