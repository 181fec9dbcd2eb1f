//! Per-token classification trace.

/// How a single argv token was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Matched a value-argument alias; the following token was consumed as
    /// its value.
    ValueFlag { slot: usize },
    /// Consumed as the value of the preceding value-argument flag.
    ValueFor { slot: usize },
    /// Matched an option alias.
    OptionFlag { slot: usize },
    /// Flag-shaped but unrecognized, or a value flag left without a value.
    Invalid,
    /// Positional token.
    NonOption,
}

/// One classified argv token, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    /// The token text as it appeared in argv.
    pub token: String,
    /// What the classifier did with it.
    pub class: TokenClass,
}

impl ClassifiedToken {
    pub(crate) fn new(token: &str, class: TokenClass) -> Self {
        Self {
            token: token.to_string(),
            class,
        }
    }
}
