//! Tests for `SummaryCache`.

use crate::tests::utils::WIDGET_SCHEMA;
use crate::ReservedHeaderPolicy;
use crate::SchemaSummary;
use crate::SummaryCache;
use crate::SummaryOptions;

#[test]
fn empty_cache_has_nothing_cached() {
    let cache = SummaryCache::default();
    assert!(cache.cached().is_none());
    assert_eq!(cache.options(), &SummaryOptions::default());
}

#[test]
fn computes_on_first_use() {
    let mut cache = SummaryCache::default();
    let summary = cache.get_or_compute(WIDGET_SCHEMA).clone();
    assert_eq!(summary, SchemaSummary::from_source(WIDGET_SCHEMA));
    assert_eq!(cache.cached(), Some(&summary));
}

/// The same text returns the very same stored summary rather than a
/// recomputed copy.
#[test]
fn same_text_reuses_summary() {
    let mut cache = SummaryCache::default();
    let first: *const SchemaSummary = cache.get_or_compute(WIDGET_SCHEMA);
    let second: *const SchemaSummary = cache.get_or_compute(WIDGET_SCHEMA);
    assert_eq!(first, second);
}

#[test]
fn changed_text_replaces_summary() {
    let mut cache = SummaryCache::default();
    cache.get_or_compute("scalar A");
    let summary = cache.get_or_compute("scalar B");
    assert_eq!(summary.type_definitions()[0].name(), "B");
    assert_eq!(summary, &SchemaSummary::from_source("scalar B"));
}

#[test]
fn changing_options_drops_summary() {
    let mut cache = SummaryCache::new(SummaryOptions::default());
    cache.get_or_compute("scalar A");

    cache.set_options(SummaryOptions::default());
    assert!(cache.cached().is_some(), "identical options keep the summary");

    cache.set_options(
        SummaryOptions::new()
            .with_reserved_header_policy(ReservedHeaderPolicy::SkipLine),
    );
    assert!(cache.cached().is_none());
    assert_eq!(
        cache.options().reserved_header_policy(),
        ReservedHeaderPolicy::SkipLine,
    );
}

#[test]
fn clear_drops_summary() {
    let mut cache = SummaryCache::default();
    cache.get_or_compute("scalar A");
    cache.clear();
    assert!(cache.cached().is_none());
}
