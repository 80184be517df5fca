use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Information about a formula read from DIMACS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem line, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem line, if present.
    pub expected_clauses: Option<usize>,

    /// The count of clauses read.
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS file into the context.
    ///
    /// - Lines beginning with `c` are comments.
    /// - The problem line `p cnf <atoms> <clauses>` is optional, though if present the context is extended to the given count of atoms.
    /// - Clauses are whitespace separated literals, terminated by `0`, and may span lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use heron_sat::context::Context;
    /// # use heron_sat::config::Config;
    /// # use heron_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(&dimacs[..]).unwrap();
    /// assert_eq!(info.expected_clauses, Some(7));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut formula_started = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    if formula_started || info.expected_atoms.is_some() {
                        return Err(err::ParseError::Line(line_counter).into());
                    }

                    let mut problem_details = buffer.split_whitespace();
                    if problem_details.nth(1) != Some("cnf") {
                        return Err(err::ParseError::ProblemSpecification.into());
                    }

                    let mut count = || -> Result<usize, err::ParseError> {
                        problem_details
                            .next()
                            .and_then(|string| string.parse().ok())
                            .ok_or(err::ParseError::ProblemSpecification)
                    };
                    let atoms = count()?;
                    let clauses = count()?;

                    self.ensure_atoms(atoms)?;
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    formula_started = true;

                    for item in buffer.split_whitespace() {
                        let literal = match item.parse::<CLiteral>() {
                            Ok(literal) if literal != CLiteral::MIN => literal,
                            _ => return Err(err::ParseError::BadToken(item.to_owned()).into()),
                        };

                        match literal {
                            0 => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }
                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::UnexpectedEnd.into());
        }

        if info
            .expected_clauses
            .is_some_and(|expected| expected != info.added_clauses)
        {
            log::warn!(target: targets::PARSER, "Expected {:?} clauses, read {}", info.expected_clauses, info.added_clauses);
        }
        log::info!(target: targets::PARSER, "Read {} clauses over {} atoms", info.added_clauses, self.atom_db.count());

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        reports::Report,
        types::err::{ErrorKind, ParseError},
    };

    #[test]
    fn clauses_over_lines() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"c comment\np cnf 5 2\n1 -2\n 3 0 -4\n0\n";

        let info = the_context.read_dimacs(&dimacs[..]);
        assert!(info.as_ref().is_ok_and(|info| info.added_clauses == 2));
        assert_eq!(the_context.atom_count(), 5);
        assert_eq!(the_context.clause_db.original_count(), 2);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn malformed() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(&b"p dnf 2 1\n1 2 0\n"[..]),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(&b"p cnf 2 1\n1 x 0\n"[..]),
            Err(ErrorKind::Parse(ParseError::BadToken("x".to_owned())))
        );

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(&b"p cnf 2 1\n1 2\n"[..]),
            Err(ErrorKind::Parse(ParseError::UnexpectedEnd))
        );
    }
}
