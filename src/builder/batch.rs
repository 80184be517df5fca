/*!
A reader for the batch instance format.

The format is a sequence of whitespace separated integers (where newlines are whitespace, like any other):
- The count of instances.
- For each instance:
  + The count of atoms, and the count of clauses.
  + Each clause, as nonzero literals terminated by `0`.

```rust
# use heron_sat::builder::batch::InstanceReader;
# use heron_sat::config::Config;
# use heron_sat::context::Context;
# use heron_sat::reports::Report;
let input = b"2
1 0
2 2 1 0 -1 2
0";

let mut reports = vec![];
for instance in InstanceReader::new(&input[..]).unwrap() {
    let mut the_context = Context::from_config(Config::default());
    assert!(the_context.add_instance(instance.unwrap()).is_ok());
    reports.push(the_context.solve().unwrap());
}

assert_eq!(reports, vec![Report::Satisfiable, Report::Satisfiable]);
```
*/

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// An instance of the batch format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instance {
    /// The count of atoms of the instance.
    pub atom_count: usize,

    /// The clauses of the instance.
    pub clauses: Vec<CClause>,
}

/// Whitespace separated integers, read from some buffer.
struct Tokens<B: BufRead> {
    reader: B,
    buffer: String,
    pending: std::vec::IntoIter<String>,
    line_counter: usize,
}

impl<B: BufRead> Tokens<B> {
    fn new(reader: B) -> Self {
        Tokens {
            reader,
            buffer: String::default(),
            pending: Vec::default().into_iter(),
            line_counter: 0,
        }
    }

    /// The next integer, or None if the input is exhausted.
    fn next_integer(&mut self) -> Result<Option<i64>, err::ParseError> {
        loop {
            if let Some(token) = self.pending.next() {
                return match token.parse::<i64>() {
                    Ok(integer) => Ok(Some(integer)),
                    Err(_) => Err(err::ParseError::BadToken(token)),
                };
            }

            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => self.line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(self.line_counter)),
            }

            self.pending = self
                .buffer
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    /// The next integer, where the input may not be exhausted.
    fn expect_integer(&mut self) -> Result<i64, err::ParseError> {
        self.next_integer()?.ok_or(err::ParseError::UnexpectedEnd)
    }

    /// The next integer, as a count.
    fn expect_count(&mut self) -> Result<usize, err::ParseError> {
        let integer = self.expect_integer()?;
        usize::try_from(integer).map_err(|_| err::ParseError::NegativeCount(integer))
    }
}

/// An iterator over the instances of some input in the batch format.
///
/// After an error no further instances are read.
pub struct InstanceReader<B: BufRead> {
    tokens: Tokens<B>,
    remaining: usize,
}

impl<B: BufRead> InstanceReader<B> {
    /// A reader of the instances of `reader`, after reading the count of instances.
    pub fn new(reader: B) -> Result<Self, err::ParseError> {
        let mut tokens = Tokens::new(reader);
        let remaining = tokens.expect_count()?;
        log::info!(target: targets::PARSER, "Reading {remaining} instances");

        Ok(InstanceReader { tokens, remaining })
    }

    /// The count of instances yet to be read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn read_instance(&mut self) -> Result<Instance, err::ParseError> {
        let atom_count = self.tokens.expect_count()?;
        let clause_count = self.tokens.expect_count()?;

        let mut clauses = Vec::default();
        let mut clause_buffer: CClause = Vec::default();

        while clauses.len() < clause_count {
            match self.tokens.expect_integer()? {
                0 => clauses.push(std::mem::take(&mut clause_buffer)),
                integer => match CLiteral::try_from(integer) {
                    Ok(literal) if literal != CLiteral::MIN => clause_buffer.push(literal),
                    _ => return Err(err::ParseError::BadToken(integer.to_string())),
                },
            }
        }

        log::trace!(target: targets::PARSER, "Instance of {atom_count} atoms and {clause_count} clauses");
        Ok(Instance {
            atom_count,
            clauses,
        })
    }
}

impl<B: BufRead> Iterator for InstanceReader<B> {
    type Item = Result<Instance, err::ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.read_instance() {
            Ok(instance) => {
                self.remaining -= 1;
                Some(Ok(instance))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Adds an instance of the batch format to the context.
    pub fn add_instance(&mut self, instance: Instance) -> Result<(), ErrorKind> {
        self.ensure_atoms(instance.atom_count)?;
        for clause in instance.clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let input = b"1\n3\n2 1 -2\n0 2 3 0";
        let mut reader = InstanceReader::new(&input[..]).unwrap();
        assert_eq!(reader.remaining(), 1);

        let instance = reader.next();
        assert_eq!(
            instance,
            Some(Ok(Instance {
                atom_count: 3,
                clauses: vec![vec![1, -2], vec![2, 3]],
            }))
        );
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_clause() {
        let input = b"1 1 2 0 1 0";
        let mut reader = InstanceReader::new(&input[..]).unwrap();
        assert_eq!(
            reader.next(),
            Some(Ok(Instance {
                atom_count: 1,
                clauses: vec![vec![], vec![1]],
            }))
        );
    }

    #[test]
    fn truncated() {
        let input = b"2 1 1 1 0 2 1 1";
        let mut reader = InstanceReader::new(&input[..]).unwrap();

        assert!(matches!(reader.next(), Some(Ok(_))));
        assert_eq!(reader.next(), Some(Err(err::ParseError::UnexpectedEnd)));
        assert!(reader.next().is_none());
    }

    #[test]
    fn clause_count_beyond_input() {
        let input = b"1 1 1000000000000000000 1 0";
        let mut reader = InstanceReader::new(&input[..]).unwrap();

        assert_eq!(reader.next(), Some(Err(err::ParseError::UnexpectedEnd)));
        assert!(reader.next().is_none());
    }

    #[test]
    fn bad_tokens() {
        assert!(matches!(
            InstanceReader::new(&b"-1"[..]),
            Err(err::ParseError::NegativeCount(-1))
        ));

        let mut reader = InstanceReader::new(&b"1 1 1 one 0"[..]).unwrap();
        assert_eq!(
            reader.next(),
            Some(Err(err::ParseError::BadToken("one".to_owned())))
        );
    }
}
