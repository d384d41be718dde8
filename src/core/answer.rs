//! Answer evaluation, shared by topic quizzes and boss questions.

use crate::content::Challenge;

/// A submitted answer. `None` at the call sites means the learner
/// submitted nothing, which always grades as incorrect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Selected option index for a multiple-choice challenge
    Choice(usize),
    /// Free-text submission for a fill-in-blank challenge
    Text(String),
}

/// Grades a submission against a challenge.
///
/// Multiple choice compares indices. Fill-in-blank compares trimmed,
/// lowercased text. A missing submission or one of the wrong kind for the
/// challenge variant is incorrect, never an error.
pub fn evaluate(challenge: &Challenge, submission: Option<&Answer>) -> bool {
    let Some(submission) = submission else {
        return false;
    };
    match (challenge, submission) {
        (Challenge::MultipleChoice { answer, .. }, Answer::Choice(selected)) => selected == answer,
        (Challenge::FillInBlank { answer_text, .. }, Answer::Text(text)) => {
            let submitted = normalize(text);
            !submitted.is_empty() && submitted == normalize(answer_text)
        }
        // Kind mismatch: grade as a miss rather than failing
        (Challenge::MultipleChoice { .. }, Answer::Text(_)) => false,
        (Challenge::FillInBlank { .. }, Answer::Choice(_)) => false,
    }
}

/// XP for a correct answer: the authored amount, or the scheme default.
pub fn xp_reward(challenge: &Challenge, default_xp: u32) -> u32 {
    challenge.declared_xp().unwrap_or(default_xp)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(answer: usize) -> Challenge {
        Challenge::MultipleChoice {
            prompt: "pick".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            answer,
            explain: None,
            xp: None,
        }
    }

    fn blank(answer_text: &str) -> Challenge {
        Challenge::FillInBlank {
            prompt: "fill".to_string(),
            answer_text: answer_text.to_string(),
            explain: None,
            xp: Some(40),
        }
    }

    #[test]
    fn test_mcq_correct_only_on_stored_index() {
        let challenge = mcq(2);
        assert!(evaluate(&challenge, Some(&Answer::Choice(2))));
        for wrong in [0, 1, 3, 99] {
            assert!(!evaluate(&challenge, Some(&Answer::Choice(wrong))));
        }
    }

    #[test]
    fn test_blank_ignores_case_and_whitespace() {
        let challenge = blank("init");
        assert!(evaluate(&challenge, Some(&Answer::Text(" Init ".to_string()))));
        assert!(evaluate(&challenge, Some(&Answer::Text("INIT".to_string()))));
        assert!(!evaluate(&challenge, Some(&Answer::Text("initial".to_string()))));
    }

    #[test]
    fn test_missing_submission_is_incorrect() {
        assert!(!evaluate(&mcq(0), None));
        assert!(!evaluate(&blank("x"), None));
    }

    #[test]
    fn test_empty_text_is_incorrect() {
        assert!(!evaluate(&blank("x"), Some(&Answer::Text("   ".to_string()))));
    }

    #[test]
    fn test_kind_mismatch_is_incorrect() {
        assert!(!evaluate(&mcq(0), Some(&Answer::Text("0".to_string()))));
        assert!(!evaluate(&blank("init"), Some(&Answer::Choice(0))));
    }

    #[test]
    fn test_xp_reward_prefers_declared_amount() {
        assert_eq!(xp_reward(&blank("x"), 30), 40);
        assert_eq!(xp_reward(&mcq(0), 30), 30);
    }
}
