pub mod coerce;
pub mod engine;
pub mod summarizer;

pub use crate::domain::model::{Holder, RawBalance, RawRecord, Summary};
pub use crate::domain::ports::{HolderSource, Presenter};
pub use crate::utils::error::Result;
