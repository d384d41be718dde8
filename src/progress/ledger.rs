//! Progress ledger: chapter-complete flags plus the aggregate meta record,
//! and the reward calculator that is the only thing allowed to grow it.

use crate::constants::{
    COINS_PER_XP_DIVISOR, MAX_CHAPTERS, STREAK_BONUS_THRESHOLD, STREAK_BONUS_XP,
};
use crate::progress::meta::Meta;

/// Outcome of one XP award, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub xp: u32,
    pub coins: u32,
    pub streak: u32,
}

/// The persisted record of everything the player has earned.
///
/// XP and coins only ever grow during play; the streak is the single
/// counter that resets. Each mutating method leaves the record fully
/// consistent, so a caller observing it between calls never sees a
/// partial update.
#[derive(Debug, Clone, Default)]
pub struct ProgressLedger {
    flags: [bool; MAX_CHAPTERS],
    pub meta: Meta,
}

impl ProgressLedger {
    pub fn new(flags: [bool; MAX_CHAPTERS], meta: Meta) -> Self {
        Self { flags, meta }
    }

    pub fn flags(&self) -> &[bool; MAX_CHAPTERS] {
        &self.flags
    }

    pub fn is_complete(&self, chapter: usize) -> bool {
        self.flags.get(chapter).copied().unwrap_or(false)
    }

    /// Marks a chapter complete. Reserved for the chapter-completion
    /// handler; nothing else writes the flags array.
    pub(crate) fn set_complete(&mut self, chapter: usize) {
        if let Some(flag) = self.flags.get_mut(chapter) {
            *flag = true;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    /// Awards `base` XP plus the streak bonus, accrues coins, and extends
    /// the streak. The bonus applies once the streak entering this answer
    /// has reached the threshold.
    pub fn award_xp(&mut self, base: u32) -> Award {
        let bonus = if self.meta.streak >= STREAK_BONUS_THRESHOLD {
            STREAK_BONUS_XP
        } else {
            0
        };
        let xp = base + bonus;
        let coins = base / COINS_PER_XP_DIVISOR;

        self.meta.xp += u64::from(xp);
        self.meta.coins += u64::from(coins);
        self.meta.streak += 1;

        Award {
            xp,
            coins,
            streak: self.meta.streak,
        }
    }

    /// Resets the streak after a miss. XP and coins are untouched.
    pub fn break_streak(&mut self) {
        self.meta.streak = 0;
    }

    /// Idempotent badge grant. Returns true only when newly granted.
    pub fn grant_badge(&mut self, name: &str) -> bool {
        self.meta.badges.insert(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_xp_accrues_xp_coins_and_streak() {
        let mut ledger = ProgressLedger::default();

        let award = ledger.award_xp(40);

        assert_eq!(award, Award { xp: 40, coins: 4, streak: 1 });
        assert_eq!(ledger.meta.xp, 40);
        assert_eq!(ledger.meta.coins, 4);
        assert_eq!(ledger.meta.streak, 1);
    }

    #[test]
    fn test_streak_bonus_applies_at_threshold() {
        let mut ledger = ProgressLedger::default();

        // Three correct answers: no bonus yet
        ledger.award_xp(30);
        ledger.award_xp(30);
        ledger.award_xp(30);
        assert_eq!(ledger.meta.xp, 90);

        // Streak is 3 entering the fourth answer: bonus kicks in
        let award = ledger.award_xp(30);
        assert_eq!(award.xp, 30 + STREAK_BONUS_XP);
        assert_eq!(ledger.meta.xp, 90 + 30 + u64::from(STREAK_BONUS_XP));
    }

    #[test]
    fn test_coins_floor_divide() {
        let mut ledger = ProgressLedger::default();
        ledger.award_xp(35);
        assert_eq!(ledger.meta.coins, 3);
        ledger.award_xp(9);
        assert_eq!(ledger.meta.coins, 3);
    }

    #[test]
    fn test_bonus_xp_does_not_mint_coins() {
        let mut ledger = ProgressLedger::default();
        ledger.meta.streak = 5;

        let award = ledger.award_xp(30);

        // Coins come from the base amount only
        assert_eq!(award.coins, 3);
        assert_eq!(ledger.meta.coins, 3);
    }

    #[test]
    fn test_break_streak_resets_only_streak() {
        let mut ledger = ProgressLedger::default();
        ledger.award_xp(50);
        ledger.award_xp(50);

        ledger.break_streak();

        assert_eq!(ledger.meta.streak, 0);
        assert_eq!(ledger.meta.xp, 100);
        assert_eq!(ledger.meta.coins, 10);
    }

    #[test]
    fn test_streak_monotonic_law() {
        let mut ledger = ProgressLedger::default();
        for n in 1..=7 {
            ledger.award_xp(10);
            assert_eq!(ledger.meta.streak, n);
        }
        ledger.break_streak();
        assert_eq!(ledger.meta.streak, 0);
        ledger.award_xp(10);
        assert_eq!(ledger.meta.streak, 1);
    }

    #[test]
    fn test_grant_badge_is_idempotent() {
        let mut ledger = ProgressLedger::default();

        assert!(ledger.grant_badge("Chapter 1 Cleared"));
        assert!(!ledger.grant_badge("Chapter 1 Cleared"));
        assert_eq!(ledger.meta.badges.len(), 1);
    }

    #[test]
    fn test_set_complete_marks_only_target_chapter() {
        let mut ledger = ProgressLedger::default();

        ledger.set_complete(2);

        assert!(ledger.is_complete(2));
        assert!(!ledger.is_complete(1));
        assert!(!ledger.is_complete(3));
        assert_eq!(ledger.completed_count(), 1);
    }

    #[test]
    fn test_set_complete_out_of_range_is_noop() {
        let mut ledger = ProgressLedger::default();
        ledger.set_complete(MAX_CHAPTERS + 1);
        assert_eq!(ledger.completed_count(), 0);
        assert!(!ledger.is_complete(MAX_CHAPTERS + 1));
    }
}
