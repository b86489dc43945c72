/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The CLI uses [env_logger](https://docs.rs/env_logger/latest/env_logger/), and so logs of a target may be requested with, e.g., `RUST_LOG=search=debug`.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::unit)
    pub const UNIT_PROPAGATION: &str = "unit_propagation";

    /// Logs related to [pure literal elimination](crate::procedures::pure)
    pub const PURE_ELIMINATION: &str = "pure_elimination";

    /// Logs related to [the search](crate::procedures::solve)
    pub const SEARCH: &str = "search";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [completion](crate::procedures::completion) of an assignment
    pub const COMPLETION: &str = "completion";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
