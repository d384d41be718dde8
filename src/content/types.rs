//! Chapter content data model.
//!
//! These records mirror the authored chapter JSON files. Content is
//! read-only at runtime; all player state lives in the progress ledger.

use serde::{Deserialize, Serialize};

/// One chapter: a run of topics capped by an optional boss gauntlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Flavor text shown on the chapter intro panel
    pub lore: String,
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub boss: Option<Boss>,
}

/// A single lesson unit. Order within the chapter is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub lesson: String,
    #[serde(default)]
    pub demo: Option<Demo>,
    #[serde(default)]
    pub quiz: Option<Challenge>,
}

/// Optional demonstration snippet attached to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demo {
    pub code: String,
    pub notes: String,
}

/// End-of-chapter gauntlet. Questions are answered strictly in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub id: String,
    pub title: String,
    pub intro: String,
    pub questions: Vec<Challenge>,
}

/// A single gradable challenge, used both for topic quizzes and boss
/// questions. The variant tag matches the authored `"type"` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Challenge {
    #[serde(rename = "mcq")]
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        /// Index into `options` of the correct choice
        answer: usize,
        #[serde(default)]
        explain: Option<String>,
        #[serde(default)]
        xp: Option<u32>,
    },
    #[serde(rename = "blank")]
    FillInBlank {
        prompt: String,
        #[serde(rename = "answerText")]
        answer_text: String,
        #[serde(default)]
        explain: Option<String>,
        #[serde(default)]
        xp: Option<u32>,
    },
}

impl Challenge {
    pub fn prompt(&self) -> &str {
        match self {
            Challenge::MultipleChoice { prompt, .. } => prompt,
            Challenge::FillInBlank { prompt, .. } => prompt,
        }
    }

    /// Explanation shown after the challenge is resolved, if authored.
    pub fn explain(&self) -> Option<&str> {
        match self {
            Challenge::MultipleChoice { explain, .. } => explain.as_deref(),
            Challenge::FillInBlank { explain, .. } => explain.as_deref(),
        }
    }

    /// Declared XP reward, if the author overrode the default.
    pub fn declared_xp(&self) -> Option<u32> {
        match self {
            Challenge::MultipleChoice { xp, .. } => *xp,
            Challenge::FillInBlank { xp, .. } => *xp,
        }
    }
}

impl Chapter {
    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcq_deserializes_from_tagged_json() {
        let json = serde_json::json!({
            "type": "mcq",
            "prompt": "Pick one",
            "options": ["a", "b", "c"],
            "answer": 1,
            "explain": "because",
            "xp": 40
        });

        let challenge: Challenge = serde_json::from_value(json).unwrap();
        match challenge {
            Challenge::MultipleChoice {
                ref options,
                answer,
                ref xp,
                ..
            } => {
                assert_eq!(options.len(), 3);
                assert_eq!(answer, 1);
                assert_eq!(*xp, Some(40));
            }
            _ => panic!("expected mcq variant"),
        }
    }

    #[test]
    fn test_blank_deserializes_with_optional_fields_absent() {
        let json = serde_json::json!({
            "type": "blank",
            "prompt": "Name the keyword",
            "answerText": "init"
        });

        let challenge: Challenge = serde_json::from_value(json).unwrap();
        match &challenge {
            Challenge::FillInBlank {
                answer_text,
                explain,
                xp,
                ..
            } => {
                assert_eq!(answer_text, "init");
                assert!(explain.is_none());
                assert!(xp.is_none());
            }
            _ => panic!("expected blank variant"),
        }
        assert_eq!(challenge.prompt(), "Name the keyword");
        assert!(challenge.declared_xp().is_none());
    }

    #[test]
    fn test_unknown_challenge_type_rejected() {
        let json = serde_json::json!({
            "type": "essay",
            "prompt": "Write at length"
        });

        assert!(serde_json::from_value::<Challenge>(json).is_err());
    }

    #[test]
    fn test_chapter_without_boss() {
        let json = serde_json::json!({
            "id": "ch-intro",
            "title": "Intro",
            "lore": "Once upon a time",
            "topics": []
        });

        let chapter: Chapter = serde_json::from_value(json).unwrap();
        assert!(chapter.boss.is_none());
        assert_eq!(chapter.topic_count(), 0);
        assert!(chapter.topic(0).is_none());
    }
}
