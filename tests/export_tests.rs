// File: tests/export_tests.rs
use chrono::NaiveDate;
use stride::context::{AppContext, TestContext};
use stride::export::{export_filename, save_document};
use stride::model::compiler;
use stride::model::{Category, RoadmapItem};

#[test]
fn test_filename_is_prefixed_slug_of_goal() {
    assert_eq!(export_filename("Learn piano"), "strideAI-Learn-piano.ics");
    // Cut to 20 characters happens before whitespace collapse
    assert_eq!(
        export_filename("Learn to play piano this year"),
        "strideAI-Learn-to-play-piano-.ics"
    );
    assert_eq!(export_filename("Run  a\tmarathon"), "strideAI-Run-a-marathon.ics");
}

#[test]
fn test_saved_file_matches_serialized_document() {
    let ctx = TestContext::new();
    let dir = ctx.get_data_dir().unwrap();

    let item = RoadmapItem::new(
        "Learn piano".to_string(),
        Category::Hobby,
        Some("2026-01-02".to_string()),
        "## Day 1\n- Practice scales".to_string(),
        1_767_225_600_000,
    );
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let doc = compiler::compile_roadmap(&item, now).unwrap();

    let path = save_document(&doc, &item.goal, &dir).unwrap();
    assert_eq!(path.file_name().unwrap(), "strideAI-Learn-piano.ics");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.to_ics());
}
