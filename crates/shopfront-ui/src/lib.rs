pub mod ad;

pub use ad::{render_ad, Ad, AdProps};
