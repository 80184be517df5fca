/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption], which pairs the value with a name and the bounds of the value.

The [Default] configuration follows the usual choices for a CDCL solver of this kind:
- Activity decays by a factor of 0.98 after each conflict, and each atom in a learnt clause is bumped by 1.25 raised to the negated LBD of the clause.
- Restarts are scheduled geometrically, with an initial goal of 500 conflicts which grows by a factor of 1.2.
- The value given to a decision is the previous value of the atom, and false if the atom has never held a value.

```rust
# use heron_sat::config::Config;
let mut config = Config::default();

assert!(config.restart_goal.set(100).is_ok());
assert!(config.polarity_lean.set(2.0).is_err());
assert_eq!(config.polarity_lean.value, 0.0);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation used for the activity of atoms.
pub type Activity = f64;

/// The probability of assigning positive polarity to an atom when freely choosing a value.
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The factor by which the activity of every atom is multiplied after each conflict.
    pub activity_decay: ConfigOption<Activity>,

    /// The base of the activity bump given to each atom of a learnt clause, raised to the negated LBD of the clause.
    pub lbd_bump_base: ConfigOption<Activity>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The number of conflicts before the first restart.
    pub restart_goal: ConfigOption<u32>,

    /// The factor by which the restart goal grows after each restart.
    pub restart_growth: ConfigOption<f64>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise decide with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing a value.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activity_decay: ConfigOption {
                name: "activity_decay",
                min: f64::MIN_POSITIVE,
                max: 1.0,
                value: 0.98,
            },

            lbd_bump_base: ConfigOption {
                name: "lbd_bump_base",
                min: 1.0,
                max: 16.0,
                value: 1.25,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_goal: ConfigOption {
                name: "restart_goal",
                min: 1,
                max: u32::MAX,
                value: 500,
            },

            restart_growth: ConfigOption {
                name: "restart_growth",
                min: 1.0,
                max: 16.0,
                value: 1.2,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
