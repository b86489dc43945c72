use std::{fs::File, io::BufReader, path::Path};

use dpll_sat::{
    config::{Config, DecisionPolicy},
    context::Context,
    procedures::evaluate::evaluate,
    reports::Report,
};

fn formula_report(path: &Path, config: &Config) -> Report {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    let mut ctx = Context::from_config(config.clone());
    if let Err(e) = ctx.read_dimacs(BufReader::new(&file)) {
        panic!("{path:?}: {e:?}");
    }

    match ctx.solve() {
        Ok(Report::Satisfiable) => {
            let model = ctx.model().expect("missing model");
            assert!(evaluate(&ctx.formula, &model), "{path:?}");
        }
        Ok(_) => {}
        Err(e) => panic!("{path:?}: {e:?}"),
    }

    ctx.report()
}

fn on_directory(dir: &str, config: &Config, require: Report) -> usize {
    let mut count = 0;

    for entry in glob::glob(format!("{dir}/*.cnf").as_str()).expect("bad glob") {
        match entry {
            Ok(path) => {
                assert_eq!(require, formula_report(&path, config), "{path:?}");
                count += 1;
            }
            Err(e) => panic!("{e:?}"),
        }
    }

    count
}

fn configs() -> Vec<Config> {
    let mut configs = Vec::default();
    for policy in [DecisionPolicy::Random, DecisionPolicy::Lexicographic] {
        for seed in [0, 1, 73] {
            let mut config = Config::default();
            config.decision.value = policy;
            config.seed.value = seed;
            config.check_model.value = true;
            configs.push(config);
        }
    }
    configs
}

#[test]
fn satisfiable() {
    for config in configs() {
        assert!(on_directory("tests/cnf/sat", &config, Report::Satisfiable) > 0);
    }
}

#[test]
fn unsatisfiable() {
    for config in configs() {
        assert!(on_directory("tests/cnf/unsat", &config, Report::Unsatisfiable) > 0);
    }
}
