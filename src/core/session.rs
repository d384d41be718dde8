//! In-chapter session: the lesson → quiz → boss walk.
//!
//! A session only tracks position. Grading, rewards, and completion live
//! in the engine; closing a session discards everything here, since no
//! position below chapter-completion granularity is ever persisted.

/// Where the learner currently is inside an open chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Lesson(usize),
    Quiz(usize),
    Boss { question: usize },
}

/// One open chapter. Dropped wholesale on "back to map".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterSession {
    pub chapter_index: usize,
    pub mode: SessionMode,
}

impl ChapterSession {
    /// Opening a chapter always lands on the first lesson.
    pub fn new(chapter_index: usize) -> Self {
        Self {
            chapter_index,
            mode: SessionMode::Lesson(0),
        }
    }

    pub fn topic_index(&self) -> Option<usize> {
        match self.mode {
            SessionMode::Lesson(index) | SessionMode::Quiz(index) => Some(index),
            SessionMode::Boss { .. } => None,
        }
    }

    pub fn boss_question_index(&self) -> Option<usize> {
        match self.mode {
            SessionMode::Boss { question } => Some(question),
            _ => None,
        }
    }

    /// Lesson(i) → Quiz(i). Only meaningful from a lesson.
    pub fn enter_quiz(&mut self) {
        if let SessionMode::Lesson(index) = self.mode {
            self.mode = SessionMode::Quiz(index);
        }
    }

    /// Moves on after topic i is finished (lesson advanced past or quiz
    /// passed): the next lesson, or the boss once past the last topic.
    pub fn advance_past_topic(&mut self, topic_count: usize) {
        let index = match self.mode {
            SessionMode::Lesson(index) | SessionMode::Quiz(index) => index,
            SessionMode::Boss { .. } => return,
        };
        self.mode = if index + 1 < topic_count {
            SessionMode::Lesson(index + 1)
        } else {
            SessionMode::Boss { question: 0 }
        };
    }

    /// A correct boss answer moves the gauntlet forward one question.
    pub fn advance_boss_question(&mut self) {
        if let SessionMode::Boss { question } = self.mode {
            self.mode = SessionMode::Boss {
                question: question + 1,
            };
        }
    }
}
