//! URL grammar - the end-to-end composition example.
//!
//! Exercises optional references, a rule-text fragment with its own named
//! group (`protocol`), and two-level group qualification
//! (`TOP_proto_protocol`).

use braid_tests::prelude::*;

mod full_urls {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("url")
            .grammar("url.grammar")
            .step(
                "sample_url",
                "http://foo.bar.com/api/do?param=something&more=less#foo",
                |e| {
                    e.capture("TOP_proto", "http://")
                        .capture("TOP_proto_protocol", "http")
                        .capture("TOP_domain", "foo.bar.com")
                        .capture("TOP_bookmark", "#foo")
                },
            )
            .step("bare_domain", "foo.bar.com", |e| {
                e.capture("TOP_domain", "foo.bar.com")
                    .without("TOP_proto")
                    .without("TOP_bookmark")
            })
            .step("https_with_path_only", "https://example.org/index", |e| {
                e.capture("TOP_proto_protocol", "https")
                    .capture("TOP_domain", "example.org")
                    .capture("TOP_path", "/index")
            })
    }

    #[test]
    fn test_urls_decompose_into_components() {
        scenario().run().unwrap();
    }
}

mod components {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("url_components")
            .grammar("url.grammar")
            .rule_step("params_alone", "params", "?a=1&b=2", |e| {
                e.whole("?a=1&b=2")
            })
            .rule_step("proto_alone", "proto", "ftp://", |e| {
                e.capture("proto_protocol", "ftp")
            })
    }

    #[test]
    fn test_components_match_in_isolation() {
        scenario().run().unwrap();
    }
}
