// File: tests/plan_parser_tests.rs
use stride::model::parser::parse_plan;

#[test]
fn test_three_day_plan_round_trip() {
    let plan = "\
## Day 1
- Stretch for ten minutes
- Practice scales
## Day 2
- Review yesterday's notes
- Practice chords
## Day 3
- Record a short clip
- Listen back critically
";
    let map = parse_plan(plan);
    assert_eq!(map.len(), 3);
    for index in 0..3u32 {
        assert_eq!(map[&index].len(), 2, "day index {} should have 2 tasks", index);
    }
    // Source order within a day is preserved
    assert_eq!(map[&0][0], "Stretch for ten minutes");
    assert_eq!(map[&0][1], "Practice scales");
    assert_eq!(map[&2][1], "Listen back critically");
}

#[test]
fn test_bullets_before_any_header_are_dropped() {
    let plan = "- floating task\n* another one\n## Day 1\n- real task";
    let map = parse_plan(plan);
    assert_eq!(map.len(), 1);
    assert_eq!(map[&0], vec!["real task".to_string()]);
}

#[test]
fn test_header_without_bullets_produces_no_entry() {
    let plan = "## Day 1\nSome prose, not a bullet.\n## Day 2\n- task";
    let map = parse_plan(plan);
    assert!(!map.contains_key(&0));
    assert_eq!(map[&1], vec!["task".to_string()]);
}

#[test]
fn test_repeated_day_number_last_section_wins() {
    let plan = "## Day 2\n- first version\n## Day 2\n- second version\n- extra";
    let map = parse_plan(plan);
    assert_eq!(map.len(), 1);
    assert_eq!(
        map[&1],
        vec!["second version".to_string(), "extra".to_string()]
    );
}

#[test]
fn test_days_need_not_be_contiguous_or_sorted() {
    let plan = "## Day 7\n- late\n## Day 2\n- early";
    let map = parse_plan(plan);
    assert_eq!(map.len(), 2);
    assert_eq!(map[&6], vec!["late".to_string()]);
    assert_eq!(map[&1], vec!["early".to_string()]);
}

#[test]
fn test_header_matching_is_case_insensitive_and_accepts_stars() {
    let plan = "# DAY 1\n* star bullet\n### day 2\n- dash bullet";
    let map = parse_plan(plan);
    assert_eq!(map[&0], vec!["star bullet".to_string()]);
    assert_eq!(map[&1], vec!["dash bullet".to_string()]);
}

#[test]
fn test_header_with_trailing_title_text() {
    let plan = "## Day 4: Building momentum\n- keep going";
    let map = parse_plan(plan);
    assert_eq!(map[&3], vec!["keep going".to_string()]);
}

#[test]
fn test_unstructured_text_yields_empty_map() {
    let plan = "Here is a motivational essay about your goal.\n\nGood luck!";
    assert!(parse_plan(plan).is_empty());
    assert!(parse_plan("").is_empty());
}

#[test]
fn test_interleaved_prose_is_ignored() {
    let plan = "\
Intro paragraph.

## Day 1
Warm-up advice first.
- actual task
More commentary.
- second task

Closing remarks.
";
    let map = parse_plan(plan);
    assert_eq!(
        map[&0],
        vec!["actual task".to_string(), "second task".to_string()]
    );
}

#[test]
fn test_indented_lines_are_trimmed_before_matching() {
    let plan = "   ## Day 1\n   - indented task";
    let map = parse_plan(plan);
    assert_eq!(map[&0], vec!["indented task".to_string()]);
}
