mod operation_extractor_tests;
mod summary_cache_tests;
mod utils;
