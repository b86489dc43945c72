use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{self, NEGATION},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use std::io::BufRead;

/// Details of a DIMACS parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms in the problem specification, if a specification was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses in the problem specification, if a specification was found.
    pub expected_clauses: Option<usize>,

    /// The count of atoms added to the language of the context.
    pub added_atoms: usize,

    /// The count of clauses added to the context.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines are classified by their first token, so a line whose first token is `c` is a comment and a line whose first token is `%` ends the formula.
    ///   Atoms such as `c1` or `%a` may begin a clause.
    /// - A problem specification (`p cnf <atoms> <clauses>`) may appear before the formula, though the counts are only reported, not enforced.
    /// - Each clause is a sequence of literals terminated by `0`, and may span several lines.
    /// - A literal is an atom, optionally prefixed by `-` for negative polarity.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).expect("parse failure");
    /// assert_eq!(info.expected_clauses, Some(7));
    /// assert_eq!(info.added_atoms, 4);
    ///
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let atoms_before = self.language.count();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.split_whitespace().next() {
                None | Some("c") => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some("p") => {
                    let (atom_count, clause_count) = problem_specification(&buffer)?;
                    log::info!(target: targets::PARSE, "Expected {atom_count} atoms and {clause_count} clauses");

                    info.expected_atoms = Some(atom_count);
                    info.expected_clauses = Some(clause_count);

                    buffer.clear();
                    break 'preamble_loop;
                }

                // The line is kept in the buffer, to be read as part of the formula.
                _ => break 'preamble_loop,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            if buffer.is_empty() {
                match reader.read_line(&mut buffer) {
                    Ok(0) => break,
                    Ok(_) => line_counter += 1,
                    Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
                }
            }

            match buffer.split_whitespace().next() {
                Some("%") => break 'formula_loop,

                Some("c") => {}

                Some("p") => {
                    return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                        line_counter,
                    )))
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => clause_buffer.push(dimacs_literal(item, line_counter)?),
                        }
                    }
                }
            }

            buffer.clear();
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(err::BuildError::UnterminatedClause));
        }

        info.added_atoms = self.language.count() - atoms_before;
        log::info!(target: targets::PARSE, "Added {} atoms and {} clauses", info.added_atoms, info.added_clauses);

        Ok(info)
    }
}

/// The atom and clause counts of a problem specification line.
fn problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification),
    }

    let mut count = || -> Result<usize, err::ParseError> {
        match problem_details.next() {
            None => Err(err::ParseError::ProblemSpecification),
            Some(string) => string
                .parse()
                .map_err(|_| err::ParseError::ProblemSpecification),
        }
    };

    let atom_count = count()?;
    let clause_count = count()?;
    Ok((atom_count, clause_count))
}

/// A literal from a DIMACS token, where `line` is used to locate errors.
fn dimacs_literal(item: &str, line: usize) -> Result<CLiteral, err::ErrorKind> {
    match item.strip_prefix(NEGATION) {
        Some("") => Err(err::ErrorKind::from(err::ParseError::Negation(line))),

        Some(name) => Ok(CLiteral::new(atom::checked(name)?, false)),

        None => Ok(CLiteral::new(atom::checked(item)?, true)),
    }
}
