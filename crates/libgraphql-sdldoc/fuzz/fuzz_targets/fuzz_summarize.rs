#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_sdldoc::ReservedHeaderPolicy;
use libgraphql_sdldoc::SchemaSummary;
use libgraphql_sdldoc::SummaryOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    for policy in [ReservedHeaderPolicy::HardBoundary, ReservedHeaderPolicy::SkipLine] {
        let options = SummaryOptions::new().with_reserved_header_policy(policy);
        let _ = SchemaSummary::from_source_with_options(s, &options);
    }
});
