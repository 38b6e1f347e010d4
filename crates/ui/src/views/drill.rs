use dioxus::prelude::*;

use services::{DrillKind, DrillSession, SubmitOutcome};

#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    None,
    Correct { message: String },
    Wrong { message: String, explanation: String },
}

fn correct_message(note: Option<&str>) -> String {
    match note {
        Some(note) => format!("Correct! ✅ ({note})"),
        None => "Correct! ✅".to_string(),
    }
}

fn wrong_message(correct: &str) -> String {
    format!("Not quite. Correct answer: {correct}")
}

/// One quiz page: prompt, free-text answer, feedback, and the running tally.
///
/// All four drills share this view; only the session kind differs.
#[component]
pub fn DrillView(kind: DrillKind) -> Element {
    let mut session = use_signal(move || DrillSession::new(kind));
    let mut input = use_signal(String::new);
    let mut feedback = use_signal(|| Feedback::None);

    let mut handle_submit = move || {
        let raw = input();
        let outcome = session.with_mut(|session| session.submit(&raw));
        match outcome {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Advanced => {
                input.set(String::new());
                feedback.set(Feedback::None);
            }
            SubmitOutcome::Correct { note } => feedback.set(Feedback::Correct {
                message: correct_message(note.as_deref()),
            }),
            SubmitOutcome::Wrong {
                correct,
                explanation,
            } => feedback.set(Feedback::Wrong {
                message: wrong_message(&correct),
                explanation: explanation.to_string(),
            }),
        }
    };

    let prompt = session.read().question().prompt().to_string();
    let awaiting = session.read().awaiting_next();
    let submit_label = if awaiting { "Next question" } else { "Check" };
    let correct_count = session.read().tally().correct();
    let wrong_count = session.read().tally().wrong();

    rsx! {
        div { class: "page drill-page",
            header { class: "view-header",
                h2 { class: "view-title", "{kind.title()}" }
                p { class: "view-subtitle", "{kind.blurb()}" }
            }
            div { class: "view-divider" }

            p { class: "drill-question", "{prompt}" }

            div { class: "drill-form",
                input {
                    class: "drill-input",
                    r#type: "text",
                    placeholder: "{kind.placeholder()}",
                    value: "{input()}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            handle_submit();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| handle_submit(),
                    "{submit_label}"
                }
            }

            match feedback() {
                Feedback::None => rsx! {},
                Feedback::Correct { message } => rsx! {
                    p { class: "feedback feedback-correct", "{message}" }
                },
                Feedback::Wrong { message, explanation } => rsx! {
                    p { class: "feedback feedback-wrong", "{message}" }
                    p { class: "drill-explanation", "{explanation}" }
                },
            }

            footer { class: "drill-score",
                span { class: "score score-correct", "Correct: {correct_count}" }
                span { class: "score score-wrong", "Wrong: {wrong_count}" }
            }
        }
    }
}

#[component]
pub fn ExposureDrillView() -> Element {
    rsx! {
        DrillView { kind: DrillKind::Exposure }
    }
}

#[component]
pub fn FlashDrillView() -> Element {
    rsx! {
        DrillView { kind: DrillKind::Flash }
    }
}

#[component]
pub fn InverseSquareDrillView() -> Element {
    rsx! {
        DrillView { kind: DrillKind::InverseSquare }
    }
}

#[component]
pub fn HyperfocalDrillView() -> Element {
    rsx! {
        DrillView { kind: DrillKind::Hyperfocal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_message_includes_the_note_when_present() {
        assert_eq!(correct_message(None), "Correct! ✅");
        assert_eq!(
            correct_message(Some("Exact: 10.5 m")),
            "Correct! ✅ (Exact: 10.5 m)"
        );
    }

    #[test]
    fn wrong_message_names_the_correct_answer() {
        assert_eq!(wrong_message("f/5.6"), "Not quite. Correct answer: f/5.6");
    }
}
