//! Strength score presentation.

/// Labels indexed by score.
pub const LABELS: [&str; 5] = ["very weak", "weak", "medium", "strong", "very strong"];

/// Number of indicator segments.
pub const SEGMENTS: u8 = 4;

/// How a score is shown: a label and a count of filled segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub label: &'static str,
    pub filled: u8,
}

impl Strength {
    /// Fill flag for each segment, left to right.
    pub fn segments(&self) -> [bool; SEGMENTS as usize] {
        let mut out = [false; SEGMENTS as usize];
        for (i, seg) in out.iter_mut().enumerate() {
            *seg = self.filled >= i as u8 + 1;
        }
        out
    }
}

/// Map a score in `0..=4` to its presentation.
pub fn present(score: u8) -> Strength {
    debug_assert!(score <= 4, "strength score out of range: {score}");
    let score = score.min(4);

    // Segment i (1-based) is filled iff score >= i.
    let filled = (1..=SEGMENTS).filter(|i| score >= *i).count() as u8;

    Strength {
        label: LABELS[score as usize],
        filled,
    }
}
