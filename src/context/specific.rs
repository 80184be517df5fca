use crate::{
    config::Config,
    db::{
        atom::AtomDB, clause::ClauseDB, consequence_q::ConsequenceQ, level::LevelDB,
        watches::Watches,
    },
};

use rand::{rngs::SmallRng, SeedableRng};

use super::{ContextState, Counters, GenericContext};

/// A context which uses [SmallRng] as a source of randomness.
pub type Context = GenericContext<SmallRng>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded with the seed of the configuration, so solves are deterministic for a given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            level_db: LevelDB::default(),
            consequence_q: ConsequenceQ::default(),

            counters: Counters::from_config(&config),
            conflict: None,

            rng: SmallRng::seed_from_u64(config.seed.value),
            state: ContextState::Input,

            config,
        }
    }
}
