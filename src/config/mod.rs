/*!
Configuration of a context.

All configuration of a [context](crate::context) is contained in a [Config], and each configurable value is a [ConfigOption], bounded by some minimum and maximum.

```rust
# use dpll_sat::config::{Config, DecisionPolicy};
let mut config = Config::default();
assert_eq!(config.decision.value, DecisionPolicy::Random);

assert!(config.depth_limit.set(64).is_ok());
assert_eq!(config.depth_limit.value, 64);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod decision_policy;
pub use decision_policy::DecisionPolicy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How to choose the atom on which to branch.
    pub decision: ConfigOption<DecisionPolicy>,

    /// The seed of the source of rng used for random decisions.
    pub seed: ConfigOption<u64>,

    /// The maximum depth of recursion permitted during a search.
    ///
    /// The depth of a search is bounded by the number of atoms in the formula, and so a limit above this count has no effect.
    pub depth_limit: ConfigOption<usize>,

    /// Check any model found against the formula before reporting the formula as satisfiable.
    pub check_model: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context chooses decisions at random, with a fixed seed, and so a solve is deterministic.
    fn default() -> Self {
        Config {
            decision: ConfigOption {
                name: "decision",
                min: DecisionPolicy::MIN,
                max: DecisionPolicy::MAX,
                value: DecisionPolicy::Random,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 0,
                max: usize::MAX,
                value: 10_000,
            },

            check_model: ConfigOption {
                name: "check_model",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
