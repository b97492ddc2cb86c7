use quiz_core::model::SkillLevel;
use services::{Phase, QuizSession};

use crate::views::{ViewError, ViewState};
use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::format_duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverallVm {
    pub level: String,
    pub badge_color: &'static str,
    pub paragraphs: Vec<String>,
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub answer: String,
    pub feedback_html: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub overall: ViewState<OverallVm>,
    pub reviews: Vec<ReviewItemVm>,
}

/// Maps a session that has answered every question.
///
/// Returns `None` before the last answer is in, so the view can send the user home.
#[must_use]
pub fn map_results(session: &QuizSession) -> Option<ResultsVm> {
    let overall = match session.phase() {
        Phase::AwaitingOverall { requesting: true } => ViewState::Loading,
        Phase::AwaitingOverall { requesting: false } => match session.last_error() {
            Some(message) => ViewState::Error(ViewError::Evaluation(message.to_string())),
            None => ViewState::Idle,
        },
        Phase::Complete => {
            let evaluation = session.overall()?;
            ViewState::Ready(OverallVm {
                level: evaluation.level.clone(),
                badge_color: SkillLevel::badge_color(evaluation.skill_level()),
                paragraphs: evaluation
                    .summary_paragraphs()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                duration: session
                    .summary()
                    .ok()
                    .map(|summary| format_duration(summary.duration())),
            })
        }
        Phase::NotStarted | Phase::InProgress { .. } => return None,
    };

    let reviews = session
        .results()
        .into_iter()
        .enumerate()
        .map(|(index, result)| ReviewItemVm {
            number: index + 1,
            title: result.scenario.title().to_string(),
            paragraphs: result
                .scenario
                .paragraphs()
                .into_iter()
                .map(str::to_string)
                .collect(),
            feedback_html: markdown_to_html(&result.feedback),
            answer: result.answer,
        })
        .collect();

    Some(ResultsVm { overall, reviews })
}

#[cfg(test)]
mod tests {
    use quiz_core::Catalog;
    use quiz_core::model::OverallEvaluation;
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::{Clock, EvaluationError, QuizSession};

    use super::*;

    fn answered_all(clock: Clock) -> QuizSession {
        let mut session = QuizSession::new(clock);
        session
            .start_with_rng(Catalog::builtin(), &mut StdRng::seed_from_u64(11))
            .unwrap();
        for number in 1..=5 {
            session.set_draft(format!("answer {number}"));
            let pending = session.begin_submit().unwrap();
            session
                .finish_submit(pending, Ok(format!("**Feedback {number}**")))
                .unwrap();
            session.next().unwrap();
        }
        session
    }

    #[test]
    fn unfinished_sessions_do_not_map() {
        let mut session = QuizSession::new(Clock::fixed(fixed_now()));
        assert!(map_results(&session).is_none());
        session
            .start_with_rng(Catalog::builtin(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert!(map_results(&session).is_none());
    }

    #[test]
    fn awaiting_overall_lists_reviews() {
        let session = answered_all(Clock::fixed(fixed_now()));
        let vm = map_results(&session).unwrap();
        assert_eq!(vm.overall, ViewState::Idle);
        assert_eq!(vm.reviews.len(), 5);
        assert_eq!(vm.reviews[4].number, 5);
        assert_eq!(vm.reviews[2].answer, "answer 3");
        assert!(vm.reviews[0].feedback_html.contains("<strong>Feedback 1</strong>"));
    }

    #[test]
    fn failed_overall_is_an_error_state() {
        let mut session = answered_all(Clock::fixed(fixed_now()));
        let pending = session.begin_overall().unwrap();
        assert_eq!(map_results(&session).unwrap().overall, ViewState::Loading);

        let _ = session.finish_overall(
            pending,
            Err(EvaluationError::Upstream {
                status: 500,
                message: "Failed to get overall evaluation. Please try again.".into(),
            }),
        );
        match map_results(&session).unwrap().overall {
            ViewState::Error(err) => assert_eq!(
                err.message(),
                "Failed to get overall evaluation. Please try again."
            ),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn complete_session_shows_badge_and_duration() {
        let mut session = answered_all(Clock::fixed(fixed_now()));
        let pending = session.begin_overall().unwrap();
        session
            .finish_overall(
                pending,
                Ok(OverallEvaluation::new("Lead Designer", "Great.\n\nKeep going.")),
            )
            .unwrap();

        let vm = map_results(&session).unwrap();
        let ViewState::Ready(overall) = vm.overall else {
            panic!("expected ready state");
        };
        assert_eq!(overall.level, "Lead Designer");
        assert_eq!(overall.badge_color, "#28a745");
        assert_eq!(overall.paragraphs, ["Great.", "Keep going."]);
        assert_eq!(overall.duration.as_deref(), Some("0s"));
    }
}
