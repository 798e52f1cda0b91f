//! Golden output tests for whole-document formatting
//!
//! These snapshots pin the exact output of the pipeline for documents
//! exercising every rule family together. If one of these changes, a
//! stage's behavior (or the stage order) changed.

use textfmt::textfmt::format_text;

#[test]
fn golden_case_marker_with_quotes() {
    insta::assert_snapshot!(
        format_text("hello (cap) world, a amazing ' test '"),
        @"Hello world, an amazing' test'"
    );
}

#[test]
fn golden_comprehensive_document() {
    insta::assert_snapshot!(
        format_text(
            "there (cap) once was a hero named link (cap, 3), he carried 1e (hex) rupees and 10 (bin) arrows."
        ),
        @"There once was an Hero Named Link, he carried 30 rupees and 2 arrows."
    );
}

#[test]
fn golden_numeric_conversions() {
    insta::assert_snapshot!(format_text("add 42 (hex) and 10 (bin)"), @"add 66 and 2");
}

#[test]
fn golden_article_pair() {
    insta::assert_snapshot!(
        format_text("a apple and a orange"),
        @"an apple and an orange"
    );
}

#[test]
fn golden_quote_trimming() {
    insta::assert_snapshot!(
        format_text("he said ' hello world '"),
        @"he said' hello world'"
    );
}

#[test]
fn golden_punctuation_normalization() {
    insta::assert_snapshot!(
        format_text("wait ... what !? really"),
        @"wait... what!? really"
    );
}
