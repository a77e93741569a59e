use std::collections::BTreeMap;
use std::time::Duration;

use exam_core::model::{Exam, ExamId, ExamSummary, OptionKey, Question, QuestionId};
use exam_core::scoring::ReviewFilter;
use services::FinishReason;
use storage::repository::{ExamRepository, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn question(id: u64, correct: OptionKey) -> Question {
    let options = BTreeMap::from([
        (OptionKey::A, format!("Alpha {id}")),
        (OptionKey::B, format!("Bravo {id}")),
        (OptionKey::C, format!("Charlie {id}")),
    ]);
    Question::new(
        QuestionId::new(id),
        format!("Prompt number {id}"),
        options,
        correct,
        Some(format!("Reasoning {id}")),
        Some("Handbook p. 12".to_string()),
    )
    .unwrap()
}

fn exam(id: u64, exam_number: u32, description: Option<&str>, questions: Vec<Question>) -> Exam {
    Exam::new(
        ExamId::new(id),
        exam_number,
        format!("Mock Exam {exam_number}"),
        description.map(str::to_string),
        30,
        questions,
    )
    .unwrap()
}

fn three_question_exam() -> Exam {
    exam(
        1,
        1,
        Some("Warm-up set"),
        vec![
            question(1, OptionKey::A),
            question(2, OptionKey::B),
            question(3, OptionKey::C),
        ],
    )
}

struct FailingExamRepo;

#[async_trait::async_trait]
impl ExamRepository for FailingExamRepo {
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_exam(&self, _id: ExamId) -> Result<Option<Exam>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn exam_list_renders_cards_in_order() {
    let exams = [
        exam(7, 2, None, vec![question(1, OptionKey::A)]),
        three_question_exam(),
    ];
    let mut harness = setup_view_harness(ViewKind::ExamList, &exams).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let first = html.find("Mock Exam 1").expect("first exam");
    let second = html.find("Mock Exam 2").expect("second exam");
    assert!(first < second, "exams out of order in {html}");
    assert!(html.contains("Warm-up set"), "missing description in {html}");
    assert!(
        html.contains("No description available."),
        "missing fallback in {html}"
    );
    assert!(html.contains("30 min"), "missing duration in {html}");
    assert!(html.contains("3 questions"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_list_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::ExamList, &[]).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No exams yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_list_renders_error_state() {
    let storage = Storage::from_repository(FailingExamRepo);
    let mut harness = setup_view_harness_with_storage(ViewKind::ExamList, &storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn solve_view_links_to_practice_exams() {
    let mut harness = setup_view_harness(ViewKind::Solve, &[]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Practice Exams"), "missing section in {html}");
    assert!(html.contains("Coming soon."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_exam_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Exam(99), &[three_question_exam()]).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Exam not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_requires_terms_before_start() {
    let mut harness = setup_view_harness(ViewKind::Exam(1), &[three_question_exam()]).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Mock Exam 1"), "missing title in {html}");
    assert!(html.contains("Start Exam"), "missing start in {html}");
    assert!(html.contains("disabled"), "start should be disabled in {html}");

    let started = harness.with_runner(|runner| runner.start());
    assert!(started.is_err());
}

#[tokio::test(flavor = "current_thread")]
async fn active_exam_renders_question_timer_and_pagination() {
    let mut harness = setup_view_harness(ViewKind::Exam(1), &[three_question_exam()]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.set_terms_accepted(true).unwrap();
        runner.start().unwrap();
        runner.next();
        runner.select_answer(OptionKey::B).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("Question 2"), "missing question number in {html}");
    assert!(html.contains("Prompt number 2"), "missing prompt in {html}");
    assert!(html.contains("30:00"), "missing timer in {html}");
    assert!(html.contains("Answered 1 / 3"), "missing progress in {html}");
    assert!(
        html.contains("question__option--selected"),
        "missing selection in {html}"
    );
    assert!(
        html.contains("exam-pagination__item--current"),
        "missing pagination in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn empty_exam_shows_placeholder_when_started() {
    let empty = exam(5, 1, None, Vec::new());
    let mut harness = setup_view_harness(ViewKind::Exam(5), &[empty]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.toggle_terms().unwrap();
        runner.start().unwrap();
    });
    let html = harness.render();
    assert!(
        html.contains("This exam has no questions yet."),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_show_score_and_filtered_review() {
    let mut harness = setup_view_harness(ViewKind::Exam(1), &[three_question_exam()]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.set_terms_accepted(true).unwrap();
        runner.start().unwrap();
        runner.select_answer(OptionKey::A).unwrap();
        runner.next();
        runner.select_answer(OptionKey::C).unwrap();
        runner.finish(FinishReason::Confirmed).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("33%"), "missing score in {html}");
    assert!(html.contains("Prompt number 3"), "missing review item in {html}");
    assert!(html.contains("Reasoning 1"), "missing explanation in {html}");
    assert!(!html.contains("Time is up"), "unexpected banner in {html}");

    harness.with_runner(|runner| runner.toggle_filter(ReviewFilter::Wrong));
    let html = harness.render();
    assert!(html.contains("Prompt number 2"), "missing wrong item in {html}");
    assert!(!html.contains("Prompt number 1"), "correct item leaked in {html}");
    assert!(html.contains("Clear filter"), "missing clear button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_category_and_time_up_banner() {
    let single = exam(3, 1, None, vec![question(1, OptionKey::A)]);
    let mut harness = setup_view_harness(ViewKind::Exam(3), &[single]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.set_terms_accepted(true).unwrap();
        runner.start().unwrap();
        runner.select_answer(OptionKey::A).unwrap();
        assert!(runner.time_up());
        runner.toggle_filter(ReviewFilter::Empty);
    });
    let html = harness.render();
    assert!(html.contains("Time is up"), "missing banner in {html}");
    assert!(
        html.contains("No results in this category."),
        "missing empty category in {html}"
    );
    assert!(html.contains("100%"), "missing score in {html}");
}

fn one_minute_exam(id: u64) -> Exam {
    Exam::new(
        ExamId::new(id),
        1,
        "Sprint",
        None,
        1,
        vec![question(1, OptionKey::A), question(2, OptionKey::B)],
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timer_finishes_exam_when_time_runs_out() {
    let mut harness = setup_view_harness(ViewKind::Exam(4), &[one_minute_exam(4)]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.set_terms_accepted(true).unwrap();
        runner.start().unwrap();
        runner.select_answer(OptionKey::A).unwrap();
    });
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("01:00"), "missing countdown in {html}");

    tokio::time::advance(Duration::from_secs(61)).await;
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Time is up"), "missing banner in {html}");
    assert!(html.contains("50%"), "missing score in {html}");
    let (reason, finished_at) = harness.with_runner(|runner| {
        let finished = runner.finished().expect("finished by timer");
        (finished.reason(), finished.finished_at())
    });
    assert_eq!(reason, FinishReason::TimeUp);

    tokio::time::advance(Duration::from_secs(120)).await;
    harness.drive_async().await;
    let again = harness.with_runner(|runner| {
        let finished = runner.finished().expect("still finished");
        (finished.reason(), finished.finished_at())
    });
    assert_eq!(again, (FinishReason::TimeUp, finished_at));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn timer_is_silent_after_confirmed_finish() {
    let mut harness = setup_view_harness(ViewKind::Exam(4), &[one_minute_exam(4)]).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.with_runner(|runner| {
        runner.set_terms_accepted(true).unwrap();
        runner.start().unwrap();
    });
    harness.drive_async().await;

    harness.with_runner(|runner| runner.finish(FinishReason::Confirmed).unwrap());
    harness.drive_async().await;

    tokio::time::advance(Duration::from_secs(120)).await;
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("Time is up"), "unexpected banner in {html}");
    let reason = harness.with_runner(|runner| runner.finished().map(|f| f.reason()));
    assert_eq!(reason, Some(FinishReason::Confirmed));
}
