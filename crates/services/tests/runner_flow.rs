use std::collections::BTreeMap;

use exam_core::model::{Exam, ExamId, OptionKey, Question, QuestionId};
use exam_core::scoring::{QuestionOutcome, ReviewFilter};
use exam_core::time::fixed_now;
use services::{AppServices, Clock, FinishReason, RunnerPhase};
use storage::repository::{ExamWriteRepository, InMemoryRepository, Storage};

fn question(id: u64, correct: OptionKey) -> Question {
    let options = BTreeMap::from([
        (OptionKey::A, "yes".to_string()),
        (OptionKey::B, "no".to_string()),
        (OptionKey::C, "maybe".to_string()),
    ]);
    Question::new(
        QuestionId::new(id),
        format!("Statement {id}"),
        options,
        correct,
        Some(format!("Explanation {id}")),
        None,
    )
    .unwrap()
}

async fn services_with_exam() -> AppServices {
    let repo = InMemoryRepository::new();
    let exam = Exam::new(
        ExamId::new(42),
        1,
        "Civil Service Mock",
        Some("Ten-minute drill".to_string()),
        10,
        vec![
            question(1, OptionKey::A),
            question(2, OptionKey::B),
            question(3, OptionKey::C),
        ],
    )
    .unwrap();
    repo.upsert_exam(&exam).await.unwrap();
    AppServices::from_storage(&Storage::from_repository(repo), Clock::fixed(fixed_now()))
}

#[tokio::test]
async fn attempt_runs_from_list_to_review() {
    let services = services_with_exam().await;
    let exams = services.exam_service();

    let listed = exams.list_exams().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].question_count, 3);

    let exam = exams.get_exam(listed[0].id).await.unwrap().expect("exam");
    let mut runner = exams.start_attempt(exam);
    runner.set_terms_accepted(true).unwrap();
    runner.start().unwrap();

    runner.select_answer(OptionKey::A).unwrap();
    runner.jump_to(2);
    runner.select_answer(OptionKey::A).unwrap();
    runner.finish(FinishReason::Confirmed).unwrap();

    assert_eq!(runner.phase(), RunnerPhase::Finished);
    let results = runner.results().unwrap();
    assert_eq!((results.correct, results.wrong, results.empty), (1, 1, 1));

    runner.toggle_filter(ReviewFilter::Empty);
    let items = runner.review_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].outcome, QuestionOutcome::Empty);
    assert_eq!(items[0].question.explanation(), Some("Explanation 2"));
}

#[tokio::test]
async fn timer_expiry_ends_attempt_once() {
    let services = services_with_exam().await;
    let exams = services.exam_service();
    let exam = exams.get_exam(ExamId::new(42)).await.unwrap().unwrap();

    let mut runner = exams.start_attempt(exam);
    runner.toggle_terms().unwrap();
    runner.start().unwrap();
    runner.select_answer(OptionKey::A).unwrap();

    assert!(runner.time_up());
    assert!(!runner.time_up());
    let finished = runner.finished().unwrap();
    assert_eq!(finished.reason(), FinishReason::TimeUp);
    assert_eq!(finished.results().correct, 1);
    assert_eq!(finished.results().empty, 2);
}

#[tokio::test]
async fn unknown_exam_is_not_found() {
    let services = services_with_exam().await;
    let missing = services
        .exam_service()
        .get_exam(ExamId::new(7))
        .await
        .unwrap();
    assert!(missing.is_none());
}
