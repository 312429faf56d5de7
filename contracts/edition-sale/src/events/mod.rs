mod builder;

mod contract;
mod edition;
mod item;

pub use contract::*;
pub use edition::*;
pub use item::*;

pub(crate) use builder::EventBuilder;

pub(crate) const STANDARD: &str = "edition-sale";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const EDITION: &str = "EDITION_UPDATE";
pub(crate) const ITEM: &str = "ITEM_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
