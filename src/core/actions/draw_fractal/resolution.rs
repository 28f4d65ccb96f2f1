#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Preview pass: one sample per `low_res_step × low_res_step` block.
    Low,
    Full,
}

impl Resolution {
    #[must_use]
    pub const fn step(self, low_res_step: u32) -> u32 {
        match self {
            Self::Low => low_res_step,
            Self::Full => 1,
        }
    }
}
