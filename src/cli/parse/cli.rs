use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use heron_sat::config::{self, Config};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("heron_sat")
        .about("Determines whether formulas are satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The file to read. If no file is given, standard input is read."))

        .arg(Arg::new("dimacs")
            .long("dimacs")
            .short('d')
            .action(ArgAction::SetTrue)
            .help("Read a single formula in DIMACS form, rather than a batch of instances.")
            .long_help("Read a single formula in DIMACS form, rather than a batch of instances.

In DIMACS mode the result is written as 's SATISFIABLE' or 's UNSATISFIABLE', and the exit code is 10 or 20, respectively.
In batch mode a line is written for each instance, 'TAK' if the instance is satisfiable and 'NIE' otherwise."))

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("In DIMACS mode, write a satisfying valuation as a 'v' line."))

        .arg(Arg::new("stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Write counts from each solve as comments."))

        .arg(Arg::new("no_restarts")
            .long("no-restart")
            .action(ArgAction::SetTrue)
            .help("Prevent choices from being forgotten."))

        .arg(Arg::new("restart_goal")
            .long("restart-goal")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help(format!("The count of conflicts before the first restart.
Default: {}", defaults.restart_goal.value)))

        .arg(Arg::new("restart_growth")
            .long("restart-growth")
            .value_name("FACTOR")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The factor by which the count of conflicts between restarts grows.
Default: {}", defaults.restart_growth.value)))

        .arg(Arg::new("activity_decay")
            .long("activity-decay")
            .value_name("FACTOR")
            .value_parser(value_parser!(config::Activity))
            .required(false)
            .num_args(1)
            .help(format!("The factor by which the activity of each atom decays after a conflict.
Default: {}", defaults.activity_decay.value)))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .action(ArgAction::SetTrue)
            .help("Choose the value of a decision at random, rather than the previous value of the atom."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_name("PROBABILITY")
            .value_parser(value_parser!(config::PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The probability of choosing true when choosing a value at random.
Default: {}", defaults.polarity_lean.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed of the source of randomness."))
}
