use std::time::Duration;

use dioxus::prelude::*;
use exam_core::countdown::{Countdown, CountdownEvent};

/// Countdown for a running exam.
///
/// Fires `on_time_up` once when the duration elapses. The ticking task lives
/// as long as the component, so unmounting it stops the clock.
#[component]
pub fn ExamTimer(
    duration_minutes: u32,
    is_active: Memo<bool>,
    on_time_up: EventHandler<()>,
) -> Element {
    let mut countdown = use_signal(|| Countdown::from_minutes(duration_minutes));

    use_future(move || async move {
        let started = tokio::time::Instant::now();
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if !*is_active.peek() {
                countdown.write().stop();
                break;
            }
            let elapsed = started.elapsed().as_secs();
            let event = countdown.write().sync_elapsed(elapsed);
            match event {
                CountdownEvent::Running { .. } => {}
                CountdownEvent::TimeUp => {
                    on_time_up.call(());
                    break;
                }
                CountdownEvent::Idle => break,
            }
        }
    });

    let countdown = countdown.read();
    let remaining = countdown.display();
    let class = if countdown.is_low() {
        "exam-timer exam-timer--low"
    } else {
        "exam-timer"
    };

    rsx! {
        div { class: "{class}", role: "timer", aria_live: "polite",
            span { class: "exam-timer__label", "Time left" }
            span { class: "exam-timer__value", "{remaining}" }
        }
    }
}
