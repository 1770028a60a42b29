/// Outcome of iterating a single plane point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EvaluationResult {
    /// Did not escape within the iteration budget.
    Bounded,
    /// Hit a non-finite value at least once and never escaped.
    Degenerate,
    /// Collapsed onto its previous value before escaping.
    FixedPoint,
    /// Exceeded the escape radius at this zero-based iteration.
    Escaped(u32),
}

impl EvaluationResult {
    #[must_use]
    pub fn escaped_at(self) -> Option<u32> {
        match self {
            Self::Escaped(iteration) => Some(iteration),
            Self::Bounded | Self::Degenerate | Self::FixedPoint => None,
        }
    }
}
