use talent_search::workflows::candidates::{
    synthetic_candidates_seeded, CandidateRecord, Qualification, PROFESSIONAL_SKILLS,
};
use talent_search::workflows::dashboard::{
    filter, pagination, sort, DashboardEvent, DashboardState, FilterSpec, QualificationFilter,
    ScoreRange, SortDirection, SortField, SortSpec,
};

fn record(name: &str, title: &str, score: i32, qualification: Qualification) -> CandidateRecord {
    CandidateRecord {
        name: name.to_string(),
        current_job_title: title.to_string(),
        current_company: "Northwind".to_string(),
        industry: "Finance".to_string(),
        fitting_score: score,
        years_experience: 4,
        qualification,
        key_skills: PROFESSIONAL_SKILLS.to_string(),
        linkedin_url: String::new(),
        linkedin_snippet: String::new(),
        photo_url: None,
    }
}

fn names(records: &[CandidateRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn keyword_terms_must_all_match() {
    let records = vec![
        record("A", "Risk Manager", 80, Qualification::Degree),
        record("B", "Risk Analyst", 80, Qualification::Degree),
        record("C", "Operations Manager", 80, Qualification::Degree),
    ];
    let spec = FilterSpec {
        keyword: "risk manager".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(names(&filter::apply(&records, &spec)), vec!["A"]);
}

#[test]
fn equal_scores_order_by_name_regardless_of_input_order() {
    let forward = vec![
        record("Charlie", "", 80, Qualification::Degree),
        record("alice", "", 80, Qualification::Degree),
        record("Bob", "", 80, Qualification::Degree),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let spec = SortSpec::default();
    assert_eq!(names(&sort::sort(&forward, spec)), vec!["alice", "Bob", "Charlie"]);
    assert_eq!(sort::sort(&forward, spec), sort::sort(&backward, spec));
}

#[test]
fn twenty_five_records_span_three_pages() {
    let records = synthetic_candidates_seeded(11);
    let ordered = sort::sort(&records, SortSpec::default());

    let first = pagination::page(&ordered, 10, 1);
    assert_eq!((first.start_index, first.end_index), (1, 10));
    assert_eq!(first.total_pages, 3);

    let last = pagination::page(&ordered, 10, 3);
    assert_eq!((last.start_index, last.end_index), (21, 25));
    assert_eq!(last.items.len(), 5);
}

#[test]
fn filtering_twice_changes_nothing() {
    let records = synthetic_candidates_seeded(3);
    let spec = FilterSpec {
        score_range: ScoreRange { min: 70, max: 90 },
        qualification: QualificationFilter::All,
        keyword: "professional".to_string(),
    };
    let once = filter::apply(&records, &spec);
    let twice = filter::apply(&once, &spec);
    assert_eq!(once, twice);
    assert!(once
        .iter()
        .all(|record| (70..=90).contains(&record.fitting_score)));
}

#[test]
fn dashboard_session_walks_through_events() {
    let records = synthetic_candidates_seeded(5);
    let state = DashboardState::default();

    let view = state.render(&records);
    assert_eq!(view.page.items.len(), 10);
    assert_eq!(view.metrics.total_candidates, 25);
    let scores: Vec<i32> = view.page.items.iter().map(|row| row.fitting_score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    let total_pages = state.total_pages(&records);
    let state = state
        .reduce(DashboardEvent::NextPage, total_pages)
        .reduce(DashboardEvent::NextPage, total_pages)
        .reduce(DashboardEvent::NextPage, total_pages);
    assert_eq!(state.page_index, 3);
    assert_eq!(state.render(&records).page.items[0].rank, 21);

    let state = state.reduce(DashboardEvent::SortRequested(SortField::Name), total_pages);
    assert_eq!(state.page_index, 1);
    assert_eq!(state.sort.direction, SortDirection::Desc);
    let state = state.reduce(DashboardEvent::SortRequested(SortField::Name), total_pages);
    assert_eq!(state.sort.direction, SortDirection::Asc);
    assert_eq!(state.render(&records).page.items[0].name, "Professional 1");

    let state = state.reduce(DashboardEvent::ScoreRangeChanged { min: 101, max: 120 }, total_pages);
    let empty = state.render(&records);
    assert!(empty.page.items.is_empty());
    assert_eq!(empty.metrics.total_candidates, 0);
    assert_eq!(empty.page.page_index, 1);

    let state = state.reduce(DashboardEvent::FiltersCleared, 0);
    assert_eq!(state.filter, FilterSpec::default());
    assert_eq!(state.render(&records).page.total_items, 25);
}
