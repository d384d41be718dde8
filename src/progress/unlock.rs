//! Sequential-unlock policy.
//!
//! Deliberately a pure function of its inputs and re-evaluated on every
//! query; the flags array can change between checks, so nothing here is
//! cached.

use crate::constants::MAX_CHAPTERS;

/// Whether the chapter at `index` may be entered.
///
/// With sequential unlock off every chapter is open. Otherwise chapter 0
/// is always open and chapter i requires chapter i-1 to be complete.
pub fn can_open(index: usize, flags: &[bool; MAX_CHAPTERS], sequential_unlock: bool) -> bool {
    if !sequential_unlock {
        return true;
    }
    if index == 0 {
        return true;
    }
    if index >= MAX_CHAPTERS {
        return false;
    }
    flags[index - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_zero_always_open() {
        let flags = [false; MAX_CHAPTERS];
        assert!(can_open(0, &flags, true));
        assert!(can_open(0, &flags, false));
    }

    #[test]
    fn test_sequential_requires_previous_flag() {
        let mut flags = [false; MAX_CHAPTERS];
        flags[0] = true;

        assert!(can_open(1, &flags, true));
        assert!(!can_open(2, &flags, true));
    }

    #[test]
    fn test_free_roam_opens_everything() {
        let flags = [false; MAX_CHAPTERS];
        for index in 0..MAX_CHAPTERS {
            assert!(can_open(index, &flags, false));
        }
    }

    #[test]
    fn test_unlock_truth_table() {
        let mut flags = [false; MAX_CHAPTERS];
        flags[0] = true;
        flags[1] = true;
        flags[2] = true;

        for index in 0..MAX_CHAPTERS {
            let expected = index == 0 || flags[index - 1];
            assert_eq!(can_open(index, &flags, true), expected, "index {index}");
        }
    }

    #[test]
    fn test_out_of_range_index_closed_under_sequential() {
        let flags = [true; MAX_CHAPTERS];
        assert!(!can_open(MAX_CHAPTERS, &flags, true));
        assert!(can_open(MAX_CHAPTERS, &flags, false));
    }
}
