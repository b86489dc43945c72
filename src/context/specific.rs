use crate::{
    config::Config,
    generic::random::MinimalPCG32,
    structures::{formula::Formula, language::Language},
    types::err::{self},
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of rng is seeded by the [seed](Config::seed) of the configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: MinimalPCG32::from_seed(config.seed.value.to_le_bytes()),

            config,

            counters: Counters::default(),

            language: Language::default(),
            formula: Formula::default(),

            state: ContextState::Configuration,
        }
    }

    /// Creates a context from some given configuration, language, and formula.
    ///
    /// Each atom of the formula must belong to the language, though the language may contain atoms absent from the formula.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::structures::{formula::Formula, language::Language};
    /// # use dpll_sat::types::err::{BuildError, ErrorKind};
    /// let formula = Formula::from_ints(&[&[1, -2]]);
    ///
    /// let language = Language::fixed(["1", "2", "3"]).expect("invalid atom");
    /// assert!(Context::from_parts(Config::default(), language, formula.clone()).is_ok());
    ///
    /// let language = Language::fixed(["1"]).expect("invalid atom");
    /// assert!(matches!(
    ///     Context::from_parts(Config::default(), language, formula),
    ///     Err(ErrorKind::Build(BuildError::UndeclaredAtom(_)))
    /// ));
    /// ```
    pub fn from_parts(
        config: Config,
        language: Language,
        formula: Formula,
    ) -> Result<Self, err::ErrorKind> {
        formula.check_against(&language)?;

        let mut the_context = Self::from_config(config);
        the_context.language = language;
        the_context.formula = formula;
        the_context.state = ContextState::Input;

        Ok(the_context)
    }
}
