use clap::ArgMatches;

use heron_sat::{
    config::{self, Config},
    types::err::ConfigError,
};

/// Input and output options, which are not part of the configuration of a context.
#[derive(Clone, Debug, Default)]
pub struct ConfigIO {
    pub path: Option<std::path::PathBuf>,
    pub dimacs: bool,
    pub show_model: bool,
    pub show_stats: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        ConfigIO {
            path: args.get_one::<std::path::PathBuf>("path").cloned(),
            dimacs: args.get_flag("dimacs"),
            show_model: args.get_flag("model"),
            show_stats: args.get_flag("stats"),
        }
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if args.get_flag("no_restarts") {
        the_config.restart.set(false)?
    };

    if let Ok(Some(goal)) = args.try_get_one::<u32>("restart_goal") {
        the_config.restart_goal.set(*goal)?
    };

    if let Ok(Some(growth)) = args.try_get_one::<f64>("restart_growth") {
        the_config.restart_growth.set(*growth)?
    };

    if let Ok(Some(decay)) = args.try_get_one::<config::Activity>("activity_decay") {
        the_config.activity_decay.set(*decay)?
    };

    if args.get_flag("no_phase_saving") {
        the_config.phase_saving.set(false)?
    };

    if let Ok(Some(lean)) = args.try_get_one::<config::PolarityLean>("polarity_lean") {
        the_config.polarity_lean.set(*lean)?
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.set(*seed)?
    };

    Ok(the_config)
}
