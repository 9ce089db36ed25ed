//! Site components

mod nav;
mod footer;
mod cards;
mod toast;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use cards::*;
pub use toast::{use_toaster, Toast, ToastRegion, Toaster};
