use std::str::FromStr;

/// Variant methods for choosing the atom on which to branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DecisionPolicy {
    /// Choose uniformly at random from the atoms of the formula, using the rng of the context.
    Random = 0,

    /// Choose the least atom of the formula, by the ordering on strings.
    Lexicographic,
}

impl std::fmt::Display for DecisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "Random"),
            Self::Lexicographic => write!(f, "Lexicographic"),
        }
    }
}

impl DecisionPolicy {
    /// The minimum DecisionPolicy type.
    pub const MIN: DecisionPolicy = DecisionPolicy::Random;

    /// The maximum DecisionPolicy type.
    pub const MAX: DecisionPolicy = DecisionPolicy::Lexicographic;
}

impl FromStr for DecisionPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Random" => Ok(Self::Random),

            "Lexicographic" => Ok(Self::Lexicographic),

            _unkown_string => Err(()),
        }
    }
}
