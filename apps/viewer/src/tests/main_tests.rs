use super::*;

const REVIEW_FIXTURE: &str = include_str!("../../../../demos/reviews.json");
const PAGE_CONTEXT: &str = include_str!("../../../../demos/page-context.json");

fn fixture_source(fixture: &ReviewFixture) -> StaticContentSource {
    let mut source = StaticContentSource::default()
        .with_reviews(fixture.publication_id.clone(), fixture.reviews.clone());
    for (review_id, replies) in &fixture.replies {
        source = source.with_replies(review_id.clone(), replies.clone());
    }
    source
}

#[test]
fn event_flags_parse_into_typed_events() {
    let events = parse_events::<usize>(&["open:2".into(), "close".into()]).expect("valid");
    assert_eq!(events, vec![ViewEvent::Open(2), ViewEvent::Close]);

    let err = parse_events::<usize>(&["open:two".into()]).expect_err("not a number");
    assert!(format!("{err:#}").contains("bad --event 'open:two'"));
}

#[tokio::test]
async fn replaying_the_demo_fixture_opens_one_thread() {
    let fixture: ReviewFixture = serde_json::from_str(REVIEW_FIXTURE).expect("fixture");
    let source = fixture_source(&fixture);
    let mut view = ReviewThreadView::new(fixture.publication_id.clone(), fixture.access);

    let events = vec![
        ViewEvent::Toggle(ReviewId::new("r2")),
        ViewEvent::Toggle(ReviewId::new("r1")),
    ];
    replay_reviews(&mut view, &source, events).await;

    assert!(view.is_open(&ReviewId::new("r1")));
    assert!(!view.is_open(&ReviewId::new("r2")));
    let text = render::reviews(&view);
    assert!(text.contains("(write a review)"));
    assert!(text.contains("> Chidi: Agreed, chapter 4 especially."));
}

#[tokio::test]
async fn refetch_event_closes_the_open_thread() {
    let fixture: ReviewFixture = serde_json::from_str(REVIEW_FIXTURE).expect("fixture");
    let source = fixture_source(&fixture);
    let mut view = ReviewThreadView::new(fixture.publication_id.clone(), fixture.access);

    let events = vec![ViewEvent::Open(ReviewId::new("r1")), ViewEvent::Refetch];
    replay_reviews(&mut view, &source, events).await;

    assert!(view.rows().iter().all(|row| !row.open));
}

#[tokio::test]
async fn demo_page_context_drives_the_question_accordion() {
    let ctx: PageContext = serde_json::from_str(PAGE_CONTEXT).expect("page context");
    let mut view = QuestionBankView::from_context(&ctx, QuestionBankId::new("qb1"));

    replay_questions(
        &mut view,
        &StaticContentSource::default(),
        vec![ViewEvent::Open(2)],
    )
    .await;

    assert!(view.is_expanded(2));
    assert!(!view.is_expanded(0));
    let text = render::questions(&view);
    assert!(text.contains("STOICHIOMETRY"));
    assert!(!text.contains("track()"));
    assert!(text.contains("Expected answer: min 6.9 max 7.1"));
}

#[tokio::test]
async fn context_without_questions_fetches_them() {
    let mut ctx: PageContext = serde_json::from_str(PAGE_CONTEXT).expect("page context");
    let entries = ctx.page_data.questions.take().expect("demo questions");
    let source = StaticContentSource::default().with_questions(
        CentreId::new("centre-7"),
        QuestionBankId::new("qb1"),
        entries,
    );

    let view = question_view(QuestionBankId::new("qb1"), None, Some(ctx), &source)
        .await
        .expect("view");

    assert_eq!(view.panels().len(), 3);
    assert!(view.is_expanded(0));
    assert!(!render::questions(&view).contains("... loading"));
}

#[tokio::test]
async fn prefetched_questions_skip_the_fetch() {
    let ctx: PageContext = serde_json::from_str(PAGE_CONTEXT).expect("page context");

    let view = question_view(
        QuestionBankId::new("qb1"),
        None,
        Some(ctx),
        &StaticContentSource::default(),
    )
    .await
    .expect("view");

    assert!(view.state().error().is_none());
    assert_eq!(view.panels().len(), 3);
}

#[tokio::test]
async fn questions_need_a_centre_or_context() {
    let err = question_view(
        QuestionBankId::new("qb1"),
        None,
        None,
        &StaticContentSource::default(),
    )
    .await
    .err()
    .expect("no centre");
    assert!(err.to_string().contains("--centre or --context"));
}
