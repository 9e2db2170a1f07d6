use super::*;

fn result(icebreaker: &str, source: &str, summary: &str) -> IcebreakerResult {
    IcebreakerResult {
        icebreaker: icebreaker.to_owned(),
        source: source.to_owned(),
        company_summary: summary.to_owned(),
    }
}

#[test]
fn result_sections_lists_all_three_in_order() {
    let sections = result_sections(&result("Hi!", "blog", "We build widgets."));
    assert_eq!(
        sections,
        vec![
            (ICEBREAKER_LABEL, "Hi!".to_owned()),
            (SOURCE_LABEL, "blog".to_owned()),
            (SUMMARY_LABEL, "We build widgets.".to_owned()),
        ]
    );
}

#[test]
fn result_sections_skips_empty_source_and_summary() {
    let sections = result_sections(&result("Hi!", "", ""));
    assert_eq!(sections, vec![(ICEBREAKER_LABEL, "Hi!".to_owned())]);
}

#[test]
fn result_sections_keeps_summary_without_source() {
    let sections = result_sections(&result("Hi!", "", "Widgets."));
    let labels: Vec<_> = sections.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec![ICEBREAKER_LABEL, SUMMARY_LABEL]);
}

#[test]
fn result_sections_always_includes_icebreaker_even_if_empty() {
    let sections = result_sections(&IcebreakerResult::default());
    assert_eq!(sections, vec![(ICEBREAKER_LABEL, String::new())]);
}
