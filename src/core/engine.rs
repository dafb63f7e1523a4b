use crate::core::summarizer::summarize;
use crate::domain::model::Summary;
use crate::domain::ports::HolderSource;
use crate::utils::error::Result;

pub struct AnalyticsEngine<S: HolderSource> {
    source: S,
}

impl<S: HolderSource> AnalyticsEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the holder set and summarizes it with a top-`top` window.
    /// Loader errors are returned before any statistics are computed.
    pub fn run(&self, top: usize) -> Result<Summary> {
        tracing::info!("Loading holder records...");
        let records = self.source.load()?;
        tracing::info!("Loaded {} records", records.len());

        tracing::debug!("Summarizing with top-{} window", top);
        let summary = summarize(&records, top);
        tracing::info!(
            "Summarized {} holders (total balance {})",
            summary.holders,
            summary.total_balance
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawRecord;
    use crate::utils::error::AnalyticsError;

    struct InMemorySource {
        records: Vec<RawRecord>,
    }

    impl HolderSource for InMemorySource {
        fn load(&self) -> Result<Vec<RawRecord>> {
            Ok(self.records.clone())
        }
    }

    struct MissingColumnSource;

    impl HolderSource for MissingColumnSource {
        fn load(&self) -> Result<Vec<RawRecord>> {
            Err(AnalyticsError::InvalidInput {
                missing: vec!["balance".to_string()],
            })
        }
    }

    #[test]
    fn test_run_summarizes_loaded_records() {
        let engine = AnalyticsEngine::new(InMemorySource {
            records: vec![RawRecord::new("A", 30.0), RawRecord::new("B", 10.0)],
        });
        let summary = engine.run(1).unwrap();
        assert_eq!(summary.holders, 2);
        assert_eq!(summary.top_share, 0.75);
    }

    #[test]
    fn test_run_propagates_loader_errors() {
        let engine = AnalyticsEngine::new(MissingColumnSource);
        assert!(matches!(
            engine.run(10),
            Err(AnalyticsError::InvalidInput { .. })
        ));
    }
}
