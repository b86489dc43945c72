use std::path::Path;

use config::{parse_args, CliConfig};
use dpll_sat::{
    config::Config,
    context::Context,
    generic::{random::MinimalPCG32, random_formula},
    reports::{model_string, Report},
};
use rand::SeedableRng;

mod config;
mod read;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut cli_options = CliConfig::default();

    let cfg = match parse_args(&args, &mut cli_options) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    std::process::exit(run(cfg, cli_options));
}

/// Builds a context from the options given, solves, and writes the result.
/// Returns the exit code of the process.
fn run(cfg: Config, cli_options: CliConfig) -> i32 {
    let mut ctx = match cli_options.random {
        Some((atom_count, clause_count)) => {
            let mut rng = MinimalPCG32::from_seed(cfg.seed.value.to_le_bytes());
            let (language, formula) = random_formula(&mut rng, atom_count, clause_count);

            for clause in formula.clauses() {
                log::debug!("{clause}");
            }

            match Context::from_parts(cfg, language, formula) {
                Ok(ctx) => ctx,
                Err(e) => {
                    println!("c Build error: {e:?}");
                    return 1;
                }
            }
        }

        None => {
            let mut ctx = Context::from_config(cfg);

            let Some(path) = &cli_options.path else {
                println!("c {}", read::ReadError::Missing);
                return 1;
            };

            if let Err(e) = read::read_dimacs(Path::new(path), &mut ctx) {
                println!("c {e}");
                return 1;
            }

            ctx
        }
    };

    let result = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            return 2;
        }
    };

    println!("c Decisions:        {}", ctx.counters.total_decisions);
    println!("c Conflicts:        {}", ctx.counters.total_conflicts);
    println!("c Depth:            {}", ctx.counters.max_depth);
    println!("c Time:             {:.2?}", ctx.counters.time);

    println!("s {result}");

    if result == Report::Satisfiable && cli_options.model {
        match ctx.model() {
            Ok(model) => println!("v {}", model_string(&model)),
            Err(e) => {
                println!("c Model error: {e:?}");
                return 2;
            }
        }
    }

    0
}
