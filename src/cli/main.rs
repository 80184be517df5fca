#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::{BufRead, BufReader, Write};

use heron_sat::{
    builder::batch::InstanceReader,
    config::Config,
    context::Context,
    reports::Report,
    types::err::ErrorKind,
};

mod parse;

use parse::config::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    let reader: Box<dyn BufRead> = match &config_io.path {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("c Unable to open {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    match config_io.dimacs {
        true => solve_dimacs(reader, config, &config_io),
        false => solve_batch(reader, config, &config_io),
    }
}

/// Solves a single formula, read as DIMACS, and exits with the code of the result.
fn solve_dimacs(reader: Box<dyn BufRead>, config: Config, config_io: &ConfigIO) {
    let mut the_context = Context::from_config(config);

    if let Err(e) = the_context.read_dimacs(reader) {
        eprintln!("c Error loading DIMACS: {e:?}");
        std::process::exit(1);
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Context error: {e:?}");
            std::process::exit(1);
        }
    };

    if config_io.show_stats {
        if let Err(e) = write_stats(&mut std::io::stdout(), &the_context) {
            eprintln!("c Unable to write stats: {e}");
            std::process::exit(1);
        }
    }

    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            if config_io.show_model {
                println!("v {} 0", the_context.valuation_string());
            }
            std::process::exit(10)
        }
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }
        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(30)
        }
    }
}

/// Solves each instance of a batch, writing a line for each instance to standard output.
fn solve_batch(reader: Box<dyn BufRead>, config: Config, config_io: &ConfigIO) {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    if let Err(e) = write_batch(reader, config, config_io.show_stats, &mut out) {
        eprintln!("c Error: {e:?}");
        std::process::exit(1);
    }
}

/// Errors which end a batch.
#[derive(Debug)]
enum BatchError {
    Solve(ErrorKind),
    Write(std::io::Error),
}

impl From<ErrorKind> for BatchError {
    fn from(e: ErrorKind) -> Self {
        BatchError::Solve(e)
    }
}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> Self {
        BatchError::Write(e)
    }
}

/// Solves each instance of a batch, writing `TAK` or `NIE` for each instance to `out`.
///
/// Lines written before an error are flushed before the error is returned.
fn write_batch(
    reader: impl BufRead,
    config: Config,
    show_stats: bool,
    out: &mut impl Write,
) -> Result<(), BatchError> {
    let instances = InstanceReader::new(reader).map_err(ErrorKind::from)?;

    for instance in instances {
        let solved = instance.map_err(ErrorKind::from).and_then(|instance| {
            let mut the_context = Context::from_config(config.clone());
            the_context.add_instance(instance)?;
            let report = the_context.solve()?;
            Ok((report, the_context))
        });

        let (report, the_context) = match solved {
            Ok(solved) => solved,
            Err(e) => {
                out.flush()?;
                return Err(e.into());
            }
        };

        let line = match report {
            Report::Satisfiable => "TAK",
            Report::Unsatisfiable => "NIE",
            Report::Unknown => "?",
        };

        writeln!(out, "{line}")?;
        if show_stats {
            write_stats(out, &the_context)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_stats(out: &mut impl Write, the_context: &Context) -> std::io::Result<()> {
    let counters = &the_context.counters;
    writeln!(out, "c atoms:        {}", the_context.atom_count())?;
    writeln!(out, "c clauses:      {}", the_context.clause_db.original_count())?;
    writeln!(out, "c learnt:       {}", the_context.clause_db.addition_count())?;
    writeln!(out, "c conflicts:    {}", counters.total_conflicts)?;
    writeln!(out, "c decisions:    {}", counters.total_decisions)?;
    writeln!(out, "c propagations: {}", counters.total_propagations)?;
    writeln!(out, "c restarts:     {}", counters.restarts)?;
    writeln!(out, "c time:         {:.2?}", counters.time)
}
