//! Top-level game engine.
//!
//! Owns the content store, the progress ledger, its storage backend, and
//! the (at most one) open chapter session. Every UI-facing operation runs
//! to completion synchronously and yields a fresh snapshot; persistence is
//! write-through and best-effort.

use crate::constants::{
    ARCADE_BADGE, ARCADE_UNLOCK_CHAPTER, CHAPTER_CLEAR_XP, DEFAULT_BOSS_XP, DEFAULT_QUIZ_XP,
    MAX_CHAPTERS, MAX_EVENT_LOG, TOPIC_ADVANCE_XP,
};
use crate::content::{Challenge, Chapter, ContentLoader, ContentStore, Topic};
use crate::core::answer::{evaluate, xp_reward, Answer};
use crate::core::session::{ChapterSession, SessionMode};
use crate::progress::meta::Meta;
use crate::progress::persistence::{hydrate, ProgressStore};
use crate::progress::unlock::can_open;
use crate::progress::ProgressLedger;
use chrono::Utc;
use std::collections::VecDeque;

/// What the UI should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map,
    Lesson,
    Quiz,
    Boss,
}

/// Observable state after any engine operation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub mode: ViewMode,
    pub chapter_index: Option<usize>,
    pub topic_index: Option<usize>,
    /// Position in the boss gauntlet; `None` outside the boss panel or
    /// when the chapter has no boss configured.
    pub boss_question_index: Option<usize>,
    pub meta: Meta,
    pub flags: [bool; MAX_CHAPTERS],
}

pub struct Engine {
    content: ContentStore,
    loader: Option<ContentLoader>,
    ledger: ProgressLedger,
    store: Box<dyn ProgressStore>,
    session: Option<ChapterSession>,
    /// Recent player-facing events, newest first
    events: VecDeque<String>,
}

impl Engine {
    /// Engine over an already-resolved content store.
    pub fn new(content: ContentStore, store: Box<dyn ProgressStore>) -> Self {
        let ledger = hydrate(store.as_ref());
        Self {
            content,
            loader: None,
            ledger,
            store,
            session: None,
            events: VecDeque::new(),
        }
    }

    /// Engine whose content is still loading in the background. The map
    /// renders a loading state until `poll_content` installs the result.
    pub fn with_loader(loader: ContentLoader, store: Box<dyn ProgressStore>) -> Self {
        let mut engine = Self::new(ContentStore::empty(), store);
        engine.loader = Some(loader);
        engine
    }

    /// True while any chapter load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|loader| loader.is_loading())
    }

    /// Installs the loaded content once the background load has settled.
    /// Called each frame by the UI loop; cheap when there is nothing to do.
    pub fn poll_content(&mut self) {
        if self.loader.as_ref().is_some_and(|loader| !loader.is_loading()) {
            if let Some(loader) = self.loader.take() {
                self.content = loader.join();
                self.push_event(format!(
                    "{} of {} chapters available",
                    self.content.loaded_count(),
                    MAX_CHAPTERS
                ));
            }
        }
    }

    // === UI-facing operations ===

    /// Enters a chapter from the map. Locked or content-less chapters
    /// leave the map view in place.
    pub fn open_chapter(&mut self, index: usize) -> Snapshot {
        if !self.can_open(index) {
            self.push_event(format!("Chapter {} is locked", index + 1));
            return self.snapshot();
        }
        let Some(title) = self.content.chapter(index).map(|c| c.title.clone()) else {
            self.push_event(format!("Chapter {}: no content yet", index + 1));
            return self.snapshot();
        };
        self.session = Some(ChapterSession::new(index));
        self.push_event(format!("Entering {title}"));
        self.snapshot()
    }

    /// Abandons the open session. Position inside the chapter is gone;
    /// only completion flags survive.
    pub fn back_to_map(&mut self) -> Snapshot {
        self.session = None;
        self.snapshot()
    }

    /// From a lesson: start its quiz, or move on when there is none.
    pub fn advance_topic(&mut self) -> Snapshot {
        let Some(mut session) = self.session else {
            return self.snapshot();
        };
        let SessionMode::Lesson(topic) = session.mode else {
            return self.snapshot();
        };
        let Some(chapter) = self.content.chapter(session.chapter_index) else {
            return self.snapshot();
        };
        let topic_count = chapter.topic_count();
        let has_quiz = chapter.topic(topic).is_some_and(|t| t.quiz.is_some());

        if has_quiz {
            session.enter_quiz();
            self.session = Some(session);
        } else {
            session.advance_past_topic(topic_count);
            if TOPIC_ADVANCE_XP > 0 {
                let award = self.ledger.award_xp(TOPIC_ADVANCE_XP);
                self.push_event(format!("+{} XP", award.xp));
                self.persist();
            }
            self.install(session);
        }
        self.snapshot()
    }

    /// Grades a submission against the current quiz or boss question.
    /// Outside a challenge this is a no-op.
    pub fn submit_answer(&mut self, submission: Option<Answer>) -> Snapshot {
        let Some(mut session) = self.session else {
            return self.snapshot();
        };
        match session.mode {
            SessionMode::Quiz(topic) => {
                let Some(challenge) = self
                    .content
                    .chapter(session.chapter_index)
                    .and_then(|c| c.topic(topic))
                    .and_then(|t| t.quiz.clone())
                else {
                    return self.snapshot();
                };
                let topic_count = self
                    .content
                    .chapter(session.chapter_index)
                    .map(|c| c.topic_count())
                    .unwrap_or(0);

                if evaluate(&challenge, submission.as_ref()) {
                    self.reward_correct(&challenge, DEFAULT_QUIZ_XP);
                    session.advance_past_topic(topic_count);
                    self.install(session);
                } else {
                    self.reward_incorrect();
                }
                self.persist();
            }
            SessionMode::Boss { question } => {
                let Some(challenge) = self
                    .content
                    .chapter(session.chapter_index)
                    .and_then(|c| c.boss.as_ref())
                    .and_then(|b| b.questions.get(question).cloned())
                else {
                    return self.snapshot();
                };
                let question_count = self
                    .content
                    .chapter(session.chapter_index)
                    .and_then(|c| c.boss.as_ref())
                    .map(|b| b.questions.len())
                    .unwrap_or(0);

                if evaluate(&challenge, submission.as_ref()) {
                    self.reward_correct(&challenge, DEFAULT_BOSS_XP);
                    if question + 1 >= question_count {
                        self.complete_chapter(session.chapter_index);
                    } else {
                        session.advance_boss_question();
                        self.session = Some(session);
                        self.persist();
                    }
                } else {
                    self.reward_incorrect();
                    self.persist();
                }
            }
            SessionMode::Lesson(_) => {}
        }
        self.snapshot()
    }

    /// Declares the boss beaten from the boss panel. The completion path
    /// for chapters without a configured boss; the last boss question
    /// routes through the same handler internally. With a question still
    /// pending this is a no-op, answers are the only way past a gauntlet.
    pub fn win_boss(&mut self) -> Snapshot {
        let Some(session) = self.session else {
            return self.snapshot();
        };
        if matches!(session.mode, SessionMode::Boss { .. }) && self.current_challenge().is_none() {
            self.complete_chapter(session.chapter_index);
        }
        self.snapshot()
    }

    // === Queries ===

    pub fn can_open(&self, index: usize) -> bool {
        can_open(
            index,
            self.ledger.flags(),
            self.ledger.meta.settings.sequential_unlock,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        let mode = match self.session.map(|s| s.mode) {
            None => ViewMode::Map,
            Some(SessionMode::Lesson(_)) => ViewMode::Lesson,
            Some(SessionMode::Quiz(_)) => ViewMode::Quiz,
            Some(SessionMode::Boss { .. }) => ViewMode::Boss,
        };
        let boss_question_index = self
            .session
            .and_then(|s| s.boss_question_index())
            .filter(|_| self.current_chapter().is_some_and(|c| c.boss.is_some()));
        Snapshot {
            mode,
            chapter_index: self.session.map(|s| s.chapter_index),
            topic_index: self.session.and_then(|s| s.topic_index()),
            boss_question_index,
            meta: self.ledger.meta.clone(),
            flags: *self.ledger.flags(),
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn meta(&self) -> &Meta {
        &self.ledger.meta
    }

    pub fn flags(&self) -> &[bool; MAX_CHAPTERS] {
        self.ledger.flags()
    }

    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().map(String::as_str)
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.session
            .and_then(|s| self.content.chapter(s.chapter_index))
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        let session = self.session?;
        let topic = session.topic_index()?;
        self.current_chapter()?.topic(topic)
    }

    /// The challenge the learner is facing right now, if any.
    pub fn current_challenge(&self) -> Option<&Challenge> {
        let session = self.session?;
        match session.mode {
            SessionMode::Quiz(topic) => self.current_chapter()?.topic(topic)?.quiz.as_ref(),
            SessionMode::Boss { question } => self
                .current_chapter()?
                .boss
                .as_ref()?
                .questions
                .get(question),
            SessionMode::Lesson(_) => None,
        }
    }

    // === Internals ===

    fn reward_correct(&mut self, challenge: &Challenge, default_xp: u32) {
        let award = self.ledger.award_xp(xp_reward(challenge, default_xp));
        if award.coins > 0 {
            self.push_event(format!(
                "Correct! +{} XP, +{} coins (streak {})",
                award.xp, award.coins, award.streak
            ));
        } else {
            self.push_event(format!("Correct! +{} XP (streak {})", award.xp, award.streak));
        }
        if let Some(explain) = challenge.explain() {
            self.push_event(explain.to_string());
        }
    }

    fn reward_incorrect(&mut self) {
        self.ledger.break_streak();
        self.push_event("Not quite. Try again.".to_string());
    }

    /// Sole writer of the completion flags. Marks the chapter, pays the
    /// clear bonus, grants badges, and returns control to the map.
    fn complete_chapter(&mut self, chapter_index: usize) {
        self.ledger.set_complete(chapter_index);
        let award = self.ledger.award_xp(CHAPTER_CLEAR_XP);
        self.push_event(format!(
            "Chapter {} cleared! +{} XP, +{} coins",
            chapter_index + 1,
            award.xp,
            award.coins
        ));

        let badge = format!("Chapter {} Cleared", chapter_index + 1);
        if self.ledger.grant_badge(&badge) {
            self.push_event(format!("Badge earned: {badge}"));
        }
        if chapter_index >= ARCADE_UNLOCK_CHAPTER && self.ledger.grant_badge(ARCADE_BADGE) {
            self.push_event("The arcade is now open!".to_string());
        }

        self.session = None;
        self.persist();
    }

    /// Installs an advanced session, announcing arrival at the boss.
    fn install(&mut self, session: ChapterSession) {
        if session.mode == (SessionMode::Boss { question: 0 }) {
            let boss_title = self
                .content
                .chapter(session.chapter_index)
                .and_then(|c| c.boss.as_ref())
                .map(|b| b.title.clone());
            match boss_title {
                Some(title) => self.push_event(format!("{title} bars the way!")),
                None => self.push_event("No boss is configured for this chapter.".to_string()),
            }
        }
        self.session = Some(session);
    }

    fn persist(&mut self) {
        self.ledger.meta.last_played = Utc::now().timestamp();
        // Write-through, best-effort: a missing backend never interrupts play
        let _ = self.store.save_flags(self.ledger.flags());
        let _ = self.store.save_meta(&self.ledger.meta);
    }

    fn push_event(&mut self, message: String) {
        if self.events.len() >= MAX_EVENT_LOG {
            self.events.pop_back();
        }
        self.events.push_front(message);
    }
}
