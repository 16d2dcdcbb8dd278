//! Checklist completion for a task's steps.

use crate::models::Step;

/// Completed / total steps and the rounded percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl StepProgress {
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// `percent` is `completed / total * 100` rounded half up, and 0 for an
/// empty checklist.
pub fn step_progress(steps: &[Step]) -> StepProgress {
    let total = steps.len();
    let completed = steps.iter().filter(|s| s.completed).count();
    let percent = if total == 0 {
        0
    } else {
        // Integer round-half-up of completed * 100 / total
        ((completed * 200 + total) / (2 * total)) as u8
    };
    StepProgress {
        completed,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(done: &[bool]) -> Vec<Step> {
        done.iter()
            .map(|&completed| Step {
                text: String::new(),
                completed,
            })
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(
            step_progress(&[]),
            StepProgress {
                completed: 0,
                total: 0,
                percent: 0
            }
        );
        assert!(!step_progress(&[]).is_done());
    }

    #[test]
    fn test_half() {
        let p = step_progress(&steps(&[true, false]));
        assert_eq!((p.completed, p.total, p.percent), (1, 2, 50));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(step_progress(&steps(&[true, false, false])).percent, 33);
        assert_eq!(step_progress(&steps(&[true, true, false])).percent, 67);
        // 1/8 = 12.5 rounds up
        let mut eighth = steps(&[false; 8]);
        eighth[0].completed = true;
        assert_eq!(step_progress(&eighth).percent, 13);
    }

    #[test]
    fn test_all_done() {
        let p = step_progress(&steps(&[true, true]));
        assert_eq!(p.percent, 100);
        assert!(p.is_done());
    }
}
