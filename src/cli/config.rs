use dpll_sat::config::{Config, DecisionPolicy};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to report a model, if one exists.
    pub model: bool,

    /// The counts of atoms and clauses of a random formula to solve, in place of a file.
    pub random: Option<(usize, usize)>,

    /// The path to a DIMACS file.
    pub path: Option<String>,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// Arguments are of the form `--name=value` or `--switch`, and any other argument is taken as the path to a DIMACS file.
pub(super) fn parse_args(args: &[String], cli_options: &mut CliConfig) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    'arg_examination: for arg in args.iter().skip(1) {
        if !arg.starts_with("--") {
            match cli_options.path {
                None => cli_options.path = Some(arg.to_owned()),
                Some(_) => {
                    return Err(ConfigError::NonSpecific(format!(
                        "Only one path may be given, found: {arg:?}"
                    )))
                }
            }
            continue 'arg_examination;
        }

        let mut split = arg.split("=");
        match split.next() {
            Some("--model") | Some("--valuation") => {
                println!("c A model will be written, if one exists.");
                cli_options.model = true;
            }

            Some("--random") => {
                if let Some(request) = split.next() {
                    if let Some((atoms, clauses)) = request.split_once(",") {
                        if let (Ok(atoms), Ok(clauses)) = (atoms.parse::<usize>(), clauses.parse::<usize>()) {
                            println!("c A random formula of {atoms} atoms and {clauses} clauses will be solved.");
                            cli_options.random = Some((atoms, clauses));
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(
                    "random requires a count of atoms and clauses, e.g. --random=10,40".to_string(),
                ));
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--check_model") => {
                let (min, max) = cfg.check_model.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        if cfg.check_model.set(value).is_ok() {
                            println!("c check_model set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "check_model requires a value between {min} and {max}"
                )));
            }

            Some("--decision") => {
                let (min, max) = cfg.decision.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<DecisionPolicy>() {
                        if cfg.decision.set(value).is_ok() {
                            println!("c decision set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "decision requires a value between {min} and {max}"
                )));
            }

            Some("--depth_limit") => {
                let (min, max) = cfg.depth_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if cfg.depth_limit.set(value).is_ok() {
                            println!("c depth_limit set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "depth_limit requires a value between {min} and {max}"
                )));
            }

            Some("--seed") => {
                let (min, max) = cfg.seed.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        if cfg.seed.set(value).is_ok() {
                            println!("c seed set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "seed requires a value between {min} and {max}"
                )));
            }

            Some(_) | None => {
                return Err(ConfigError::NonSpecific(format!(
                    "Unable to parse argument: {arg:?}"
                )));
            }
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod cli_config_tests {
    use super::*;

    fn args(given: &[&str]) -> Vec<String> {
        std::iter::once("dpll_cli")
            .chain(given.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn options_and_path() {
        let mut cli_options = CliConfig::default();
        let given = args(&["--decision=Lexicographic", "--seed=7", "--model", "formula.cnf"]);

        let Ok(cfg) = parse_args(&given, &mut cli_options) else {
            panic!("failed to parse arguments");
        };
        assert_eq!(cfg.decision.value, DecisionPolicy::Lexicographic);
        assert_eq!(cfg.seed.value, 7);
        assert!(cli_options.model);
        assert_eq!(cli_options.path.as_deref(), Some("formula.cnf"));
    }

    #[test]
    fn random_formula() {
        let mut cli_options = CliConfig::default();
        assert!(parse_args(&args(&["--random=10,40"]), &mut cli_options).is_ok());
        assert_eq!(cli_options.random, Some((10, 40)));
    }

    #[test]
    fn invalid_values() {
        let mut cli_options = CliConfig::default();
        assert!(parse_args(&args(&["--decision=Sideways"]), &mut cli_options).is_err());
        assert!(parse_args(&args(&["--random=10"]), &mut cli_options).is_err());
        assert!(parse_args(&args(&["--unknown"]), &mut cli_options).is_err());
        assert!(parse_args(&args(&["one.cnf", "two.cnf"]), &mut cli_options).is_err());
    }
}
