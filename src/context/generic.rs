use crate::{
    config::{Config, DecisionPolicy},
    misc::log::targets::{self},
    procedures::{
        completion::complete,
        decision::{Decide, LexicographicDecision, RandomDecision},
        evaluate::evaluate,
        solve::{Outcome, Search, SearchCounts},
    },
    reports::Report,
    structures::{
        assignment::Assignment, formula::Formula, language::Language, literal::CLiteral,
    },
    types::err::{self},
};

use super::{ContextState, Counters};

/// A generic context, paramaterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use dpll_sat::context::GenericContext;
/// # use dpll_sat::generic::random::MinimalPCG32;
/// # use dpll_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atoms of the context, in order of first appearance.
    ///
    /// The language is fixed at the start of a solve, and so includes atoms which are eliminated during the solve.
    pub language: Language,

    /// The formula of the context.
    pub formula: Formula,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// On success the result is also stored in the context, and so available through [report](GenericContext::report), [assignment](GenericContext::assignment), and [model](GenericContext::model).
    /// On failure the state of the context is reset to [Input](ContextState::Input).
    ///
    /// The search takes place on a thread with a stack sized to the depth limit of the context, and so the stack of the caller is not used.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind>
    where
        R: Send,
    {
        self.state = ContextState::Solving;
        let start = std::time::Instant::now();

        let depth_limit = self.config.depth_limit.value;
        let (result, counts) = match self.config.decision.value {
            DecisionPolicy::Random => {
                let mut decider = RandomDecision::new(&mut self.rng);
                search(&self.formula, &mut decider, depth_limit)
            }

            DecisionPolicy::Lexicographic => {
                search(&self.formula, &mut LexicographicDecision, depth_limit)
            }
        };

        self.counters.record(counts);
        self.counters.time = start.elapsed();

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state = ContextState::Input;
                return Err(err::ErrorKind::from(e));
            }
        };

        match outcome {
            Outcome::Satisfiable(assignment) => {
                if self.config.check_model.value {
                    self.state = ContextState::Input;
                    let model = complete(&self.language, &assignment)?;
                    if !evaluate(&self.formula, &model) {
                        log::error!(target: targets::SEARCH, "Model {assignment} fails to satisfy the formula");
                        return Err(err::ErrorKind::InvalidModel);
                    }
                }
                self.state = ContextState::Satisfiable(assignment);
            }

            Outcome::Unsatisfiable => self.state = ContextState::Unsatisfiable,
        }

        log::info!(target: targets::SEARCH, "{} after {} decisions", self.report(), counts.decisions);
        Ok(self.report())
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The (partial) assignment found by a solve, if the formula of the context is satisfiable.
    pub fn assignment(&self) -> Result<&Assignment, err::ErrorKind> {
        match &self.state {
            ContextState::Satisfiable(assignment) => Ok(assignment),
            ContextState::Unsatisfiable => Err(err::ErrorKind::from(err::StateError::NoModel)),
            _ => Err(err::ErrorKind::from(err::StateError::NotSolved)),
        }
    }

    /// A model of the formula of the context, with a literal for each atom of the language in order.
    ///
    /// The model is the [completion](crate::procedures::completion) of the assignment found by a solve.
    pub fn model(&self) -> Result<Vec<CLiteral>, err::ErrorKind> {
        let assignment = self.assignment()?;
        Ok(complete(&self.language, assignment)?)
    }
}

/// A search on `formula`, together with the counts of the search.
fn search(
    formula: &Formula,
    decider: &mut (impl Decide + Send),
    depth_limit: usize,
) -> (Result<Outcome, err::SearchError>, SearchCounts) {
    let mut search = Search::new(decider, depth_limit);
    let result = search.solve_on_thread(formula.clone(), Assignment::default());
    (result, search.counts)
}

#[cfg(test)]
mod context_tests {
    use super::*;
    use crate::{context::Context, structures::literal::Literal};

    fn context(clauses: &[&[i32]], policy: DecisionPolicy) -> Context {
        let mut config = Config::default();
        config.decision.value = policy;
        config.check_model.value = true;
        let formula = Formula::from_ints(clauses);
        match Context::from_parts(config, formula.language(), formula) {
            Ok(the_context) => the_context,
            Err(e) => panic!("{e:?}"),
        }
    }

    #[test]
    fn unsolved() {
        let the_context = context(&[&[1]], DecisionPolicy::Random);
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            the_context.model(),
            Err(err::ErrorKind::from(err::StateError::NotSolved))
        );
    }

    #[test]
    fn unsatisfiable_has_no_model() {
        let mut the_context = context(&[&[1], &[-1]], DecisionPolicy::Lexicographic);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(
            the_context.model(),
            Err(err::ErrorKind::from(err::StateError::NoModel))
        );
    }

    #[test]
    fn model_covers_the_language() {
        let formula = Formula::from_ints(&[&[1, -3]]);
        let language = Language::fixed(["1", "2", "3"]).unwrap();
        let mut the_context = Context::from_parts(Config::default(), language, formula).unwrap();

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        let model = the_context.model().unwrap();
        let atoms = model.iter().map(|l| l.atom().as_str()).collect::<Vec<_>>();
        assert_eq!(atoms, vec!["1", "2", "3"]);
    }

    #[test]
    fn random_and_lexicographic_agree() {
        let clauses: &[&[i32]] = &[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2, 3], &[-3, -2]];
        for policy in [DecisionPolicy::Random, DecisionPolicy::Lexicographic] {
            let mut the_context = context(clauses, policy);
            assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
            assert!(evaluate(&the_context.formula, &the_context.model().unwrap()));
        }
    }

    #[test]
    fn depth_exhaustion_is_an_error() {
        let mut the_context = context(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]], DecisionPolicy::Lexicographic);
        the_context.config.depth_limit.value = 0;
        assert_eq!(
            the_context.solve(),
            Err(err::ErrorKind::from(err::SearchError::DepthExhausted(0)))
        );
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn deep_solve_from_a_small_stack() {
        let clauses = (1..=1_000)
            .flat_map(|pair| [vec![2 * pair - 1, 2 * pair], vec![1 - 2 * pair, -2 * pair]])
            .collect::<Vec<_>>();
        let clauses = clauses.iter().map(|clause| clause.as_slice()).collect::<Vec<_>>();
        let mut the_context = context(&clauses, DecisionPolicy::Random);

        let small_stack = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let report = the_context.solve();
                (report, the_context.counters.max_depth)
            });

        let (report, max_depth) = small_stack.unwrap().join().unwrap();
        assert_eq!(report, Ok(Report::Satisfiable));
        assert_eq!(max_depth, 1_000);
    }

    #[test]
    fn counters() {
        let mut the_context = context(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]], DecisionPolicy::Lexicographic);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.total_decisions, 3);
        assert_eq!(the_context.counters.total_conflicts, 4);
        assert_eq!(the_context.counters.max_depth, 2);
    }

    #[test]
    fn clauses_after_a_solve() {
        let mut the_context = context(&[&[1, 2]], DecisionPolicy::Lexicographic);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        assert!(the_context.add_clause([CLiteral::from(-1)]).is_ok());
        assert_eq!(the_context.report(), Report::Unknown);

        assert!(the_context.add_clause([CLiteral::from(-2)]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }
}
