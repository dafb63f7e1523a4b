use crate::domain::model::{RawRecord, Summary};
use crate::utils::error::Result;

/// Anything that can hand the summarizer an ordered list of raw records.
pub trait HolderSource {
    fn load(&self) -> Result<Vec<RawRecord>>;
}

/// Turns a finished summary into text for the terminal.
pub trait Presenter {
    fn render(&self, summary: &Summary) -> Result<String>;
}
