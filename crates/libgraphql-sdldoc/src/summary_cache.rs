use crate::SchemaSummary;
use crate::SummaryOptions;

/// Memoizes the [`SchemaSummary`] of the most recently summarized document.
///
/// Consumers that re-render whenever their schema text may have changed can
/// call [`get_or_compute()`](Self::get_or_compute) unconditionally: the
/// document is only rescanned when its text (or the options) differ from the
/// previous call. The previous summary is discarded when a new one is
/// computed.
#[derive(Debug, Default)]
pub struct SummaryCache {
    entry: Option<CacheEntry>,
    options: SummaryOptions,
}

#[derive(Debug)]
struct CacheEntry {
    source: String,
    summary: SchemaSummary,
}

impl SummaryCache {
    pub fn new(options: SummaryOptions) -> Self {
        Self {
            entry: None,
            options,
        }
    }

    pub fn get_or_compute(&mut self, source: &str) -> &SchemaSummary {
        if !matches!(&self.entry, Some(entry) if entry.source == source) {
            log::trace!("Schema text changed; recomputing summary.");
            self.entry = None;
        }

        let options = &self.options;
        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            source: source.to_string(),
            summary: SchemaSummary::from_source_with_options(source, options),
        });
        &entry.summary
    }

    /// The cached summary, if anything has been summarized yet.
    pub fn cached(&self) -> Option<&SchemaSummary> {
        self.entry.as_ref().map(|entry| &entry.summary)
    }

    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Replaces the options. The cached summary is dropped if they differ.
    pub fn set_options(&mut self, options: SummaryOptions) {
        if self.options != options {
            self.options = options;
            self.entry = None;
        }
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
