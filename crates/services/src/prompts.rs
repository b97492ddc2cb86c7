//! Prompt text sent to the generative model.

use std::fmt::Write as _;

use quiz_core::model::QuestionResult;

pub const ANSWER_MAX_TOKENS: u32 = 800;
pub const OVERALL_MAX_TOKENS: u32 = 1000;

const ANSWER_INSTRUCTIONS: &str = "\
EVALUATION INSTRUCTIONS:
1. First, assess the quality and effort level of the response:
   - If the answer is trolling, insulting, or inappropriate, respond with dry, GladOS-style sarcasm like \"Fascinating. The candidate appears to have confused this with a different type of assessment entirely.\"
   - If the answer shows genuine effort and UX thinking, provide normal constructive feedback.

2. For genuine responses, provide feedback in this format:
**What you did well:**
- [Bullet points of strengths]

**What to consider:**
- [Bullet points of gaps or alternative perspectives]

**Alternative approaches:**
- [Bullet points of other valid approaches]

3. For low-effort or inappropriate responses, give a single dry paragraph without the structured format.

Keep feedback encouraging but honest for genuine responses. For low-effort responses, be matter-of-fact and dry. For trolling responses, channel GladOS from Portal - dry, slightly condescending, but professionally restrained.";

const OVERALL_RUBRIC: &str = "\
Based on ALL responses, assign ONE level:
- Junior Designer: Tactical thinking, missing stakeholder considerations, accepting constraints without questioning
- Mid Designer: Good tactical skills, some strategic thinking, but inconsistent in challenging assumptions
- Senior Designer: Strong strategic thinking, balances users and business, challenges assumptions, navigates politics
- Lead Designer: Exceptional strategic thinking, builds alliances, reframes problems, thinks long-term, handles politics masterfully

SPECIAL CASES:
- If most responses were low-effort or trolling, assign \"Junior Designer\" and provide a dry, matter-of-fact summary about insufficient evidence to evaluate UX capabilities.
- If responses were mixed (some genuine, some low-effort), focus evaluation on the genuine responses but note the inconsistency.

Provide your evaluation in this format:
LEVEL: [Junior Designer/Mid Designer/Senior Designer/Lead Designer]

SUMMARY:
[2-3 paragraph summary of their overall strengths, patterns in their thinking, and areas for growth. For low-effort candidates, be dry and matter-of-fact.]";

/// Prompt asking for structured feedback on one answer.
#[must_use]
pub fn answer_prompt(scenario_text: &str, answer: &str) -> String {
    format!(
        "You are evaluating a UX designer's response to a scenario. Analyze their thinking and provide constructive feedback.\n\n\
         SCENARIO:\n{scenario_text}\n\n\
         USER'S ANSWER:\n{answer}\n\n\
         {ANSWER_INSTRUCTIONS}"
    )
}

/// Prompt asking for a level and summary across every answered scenario.
#[must_use]
pub fn overall_prompt(results: &[QuestionResult]) -> String {
    let mut prompt = format!(
        "You are evaluating a UX designer's overall performance across {} scenario responses. Assign them a level and provide summary feedback.\n\n",
        results.len()
    );

    for (index, result) in results.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(
            prompt,
            "SCENARIO {number}: {title}\n{text}\n\n\
             USER'S ANSWER:\n{answer}\n\n\
             FEEDBACK RECEIVED:\n{feedback}\n\n\
             ---\n\n",
            number = index + 1,
            title = result.scenario.title(),
            text = result.scenario.text(),
            answer = result.answer,
            feedback = result.feedback,
        );
    }

    prompt.push_str(OVERALL_RUBRIC);
    prompt
}
