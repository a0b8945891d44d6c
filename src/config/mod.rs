//! Configuration module

mod site;

pub use site::PageConfig;
pub use site::SiteConfig;
pub use site::Slot;
