//! Segmentation invariants over a grid of messages.
//!
//! For every input: segments are ascending, adjacent, and cover the whole
//! text; at most one agent mention and at most one command (standalone or
//! sub-command) appear.

use std::io;

use aalto::chat_request::domain::Segment;
use rstest::rstest;
use serde_json::json;
use tokio::runtime::Runtime;

use super::helpers::{
    ParserFixture, anchored_reference, count_segments, parser_fixture, runtime,
    verify_segmentation,
};

#[rstest]
#[case("")]
#[case("hello world")]
#[case("!reviewer do the thing")]
#[case("!reviewer /fix arg")]
#[case("/explain this")]
#[case("#selection:3")]
#[case("#selection and #diff:7 together")]
#[case("x!reviewer mid-word leader")]
#[case("!reviewer hi !reviewer again")]
#[case("/explain /help twice")]
#[case("!reviewer later /fix")]
#[case("line one\nline two #selection\n/explain")]
#[case("héllo wörld #selection:1")]
#[case("trailing leader !")]
#[case("#selection:999999999999999999999999999")]
#[case("!reviewer\n/fix on the next line")]
fn every_message_is_covered_exactly_once(
    runtime: io::Result<Runtime>,
    parser_fixture: ParserFixture,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    parser_fixture.references.register(
        parser_fixture.session,
        anchored_reference(1, 1, json!("anchored-at-origin")),
    );

    let parsed = rt.block_on(parser_fixture.parser.parse(parser_fixture.session, message));

    verify_segmentation(&parsed);

    let agents = count_segments(&parsed, |s| matches!(s, Segment::Agent(_)));
    assert!(agents <= 1, "at most one agent mention: {message:?}");

    let commands = count_segments(&parsed, |s| {
        matches!(s, Segment::SlashCommand(_) | Segment::AgentSubcommand(_))
    });
    assert!(commands <= 1, "at most one command: {message:?}");
    Ok(())
}

#[rstest]
fn empty_message_has_zero_segments(
    runtime: io::Result<Runtime>,
    parser_fixture: ParserFixture,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let parsed = rt.block_on(parser_fixture.parser.parse(parser_fixture.session, ""));
    assert!(parsed.segments().is_empty());
    Ok(())
}

#[rstest]
fn segment_starts_are_strictly_increasing(
    runtime: io::Result<Runtime>,
    parser_fixture: ParserFixture,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let parsed = rt.block_on(parser_fixture.parser.parse(
        parser_fixture.session,
        "!reviewer /fix #selection:2 and #diff",
    ));

    let starts: Vec<usize> = parsed
        .segments()
        .iter()
        .map(|segment| segment.offset_range().start)
        .collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(starts, sorted, "starts must be strictly increasing");
    Ok(())
}
