pub mod clock;
pub mod template;
pub mod ticker;
pub mod updater;

pub use crate::domain::model::TickReport;
pub use crate::domain::ports::{Clock, Document};
pub use crate::utils::error::Result;
