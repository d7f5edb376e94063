//! Running score and best score

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// Obstacles cleared this session
    pub score: u32,
    /// Highest finished-session score seen (never decreases)
    pub best: u32,
}

impl Scoreboard {
    pub fn new(best: u32) -> Self {
        Self { score: 0, best }
    }

    /// One obstacle cleared; returns the new score
    pub fn record_pass(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Close the session. Returns the new best if this score beat it.
    pub fn finalize(&mut self) -> Option<u32> {
        if self.score > self.best {
            self.best = self.score;
            Some(self.best)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_only_on_improvement() {
        let mut board = Scoreboard::new(3);
        board.record_pass();
        board.record_pass();
        assert_eq!(board.finalize(), None);
        assert_eq!(board.best, 3);

        board.reset();
        for _ in 0..5 {
            board.record_pass();
        }
        assert_eq!(board.finalize(), Some(5));
        assert_eq!(board.best, 5);
    }

    #[test]
    fn test_tie_is_not_a_new_best() {
        let mut board = Scoreboard::new(2);
        board.record_pass();
        board.record_pass();
        assert_eq!(board.finalize(), None);
    }

    #[test]
    fn test_best_is_max_over_sessions() {
        let sessions = [4u32, 0, 9, 2, 9, 11, 1];
        let mut board = Scoreboard::new(0);
        let mut expected = 0;
        for &final_score in &sessions {
            let before = board.best;
            for _ in 0..final_score {
                board.record_pass();
            }
            board.finalize();
            expected = expected.max(final_score);
            assert!(board.best >= before);
            assert_eq!(board.best, expected);
            board.reset();
        }
    }
}
