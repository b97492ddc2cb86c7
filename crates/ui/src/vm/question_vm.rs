use services::{Phase, QuestionStep, QuizSession};

use crate::vm::markdown_vm::markdown_to_html;

/// What the Analyzer window shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackPane {
    Waiting,
    Analyzing,
    Ready { html: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub window_title: String,
    pub scenario_title: String,
    pub paragraphs: Vec<String>,
    pub draft: String,
    pub editable: bool,
    pub can_submit: bool,
    pub submitting: bool,
    pub answered: bool,
    pub feedback: FeedbackPane,
    pub error: Option<String>,
}

impl QuestionVm {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.number == self.total
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Analyzing..."
        } else {
            "Submit answer"
        }
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "View Results"
        } else {
            "Next Question"
        }
    }
}

/// Maps the session onto question `number` (1-based).
///
/// Returns `None` when that question is not the one in progress, which the view treats
/// as a stale or hand-typed URL.
#[must_use]
pub fn map_question(session: &QuizSession, number: usize) -> Option<QuestionVm> {
    let Phase::InProgress { index, step } = session.phase() else {
        return None;
    };
    if index + 1 != number {
        return None;
    }
    let scenario = session.current_scenario()?;

    let feedback = match step {
        QuestionStep::Submitting => FeedbackPane::Analyzing,
        QuestionStep::Answered => session
            .feedback_for(index)
            .map_or(FeedbackPane::Waiting, |text| FeedbackPane::Ready {
                html: markdown_to_html(text),
            }),
        QuestionStep::Unanswered | QuestionStep::Failed => FeedbackPane::Waiting,
    };
    let draft = match step {
        QuestionStep::Answered => session.answer_for(index).unwrap_or_default(),
        _ => session.draft(),
    };

    Some(QuestionVm {
        number,
        total: session.scenarios().len(),
        window_title: format!(
            "Question {number} of {} - {}",
            session.scenarios().len(),
            scenario.category().label().to_lowercase()
        ),
        scenario_title: scenario.title().to_string(),
        paragraphs: scenario.paragraphs().into_iter().map(str::to_string).collect(),
        draft: draft.to_string(),
        editable: session.is_editable(),
        can_submit: session.can_submit(),
        submitting: step == QuestionStep::Submitting,
        answered: step == QuestionStep::Answered,
        feedback,
        error: session.last_error().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use quiz_core::Catalog;
    use quiz_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::{EvaluationError, QuizSession};

    use super::*;

    fn started() -> QuizSession {
        let mut session = QuizSession::new(fixed_clock());
        session
            .start_with_rng(Catalog::builtin(), &mut StdRng::seed_from_u64(7))
            .unwrap();
        session
    }

    #[test]
    fn fresh_question_waits_for_a_draft() {
        let session = started();
        let vm = map_question(&session, 1).unwrap();
        let category = session.scenarios()[0].category().label().to_lowercase();
        assert_eq!(vm.window_title, format!("Question 1 of 5 - {category}"));
        assert_eq!(vm.feedback, FeedbackPane::Waiting);
        assert!(vm.editable);
        assert!(!vm.can_submit);
        assert_eq!(vm.submit_label(), "Submit answer");
        assert!(!vm.paragraphs.is_empty());
    }

    #[test]
    fn other_numbers_do_not_map() {
        let session = started();
        assert!(map_question(&session, 0).is_none());
        assert!(map_question(&session, 2).is_none());
        assert!(map_question(&QuizSession::new(fixed_clock()), 1).is_none());
    }

    #[test]
    fn submitting_then_answered() {
        let mut session = started();
        session.set_draft("Talk to the PM first.");
        let pending = session.begin_submit().unwrap();

        let vm = map_question(&session, 1).unwrap();
        assert!(vm.submitting);
        assert!(!vm.editable);
        assert_eq!(vm.submit_label(), "Analyzing...");
        assert_eq!(vm.feedback, FeedbackPane::Analyzing);

        session
            .finish_submit(pending, Ok("**What you did well:**\n- Good".into()))
            .unwrap();
        let vm = map_question(&session, 1).unwrap();
        assert!(vm.answered);
        assert_eq!(vm.draft, "Talk to the PM first.");
        assert_eq!(vm.next_label(), "Next Question");
        match vm.feedback {
            FeedbackPane::Ready { html } => assert!(html.contains("<li>Good</li>")),
            other => panic!("unexpected pane {other:?}"),
        }
    }

    #[test]
    fn failure_keeps_draft_and_shows_error() {
        let mut session = started();
        session.set_draft("Ship it.");
        let pending = session.begin_submit().unwrap();
        let _ = session.finish_submit(pending, Err(EvaluationError::Validation));

        let vm = map_question(&session, 1).unwrap();
        assert_eq!(vm.draft, "Ship it.");
        assert!(vm.can_submit);
        assert_eq!(
            vm.error.as_deref(),
            Some("Please write an answer before submitting.")
        );
    }
}
