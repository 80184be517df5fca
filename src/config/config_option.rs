use crate::types::err::ConfigError;

/// A named configuration option, bounded by a minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, so long as the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(ConfigError::OutOfBounds(self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        let mut option = ConfigOption {
            name: "lean",
            min: 0.0,
            max: 1.0,
            value: 0.5,
        };

        assert_eq!(option.set(1.5), Err(ConfigError::OutOfBounds("lean")));
        assert_eq!(option.value, 0.5);

        assert!(option.set(1.0).is_ok());
        assert_eq!(option.value, 1.0);
        assert_eq!(option.min_max(), (0.0, 1.0));
    }
}
