/*!
Configuration of an encoder.

All configuration for an encoder is contained within a [Config], read once when the encoder is built.
The configuration of an encoder can not be changed after the encoder is built.

- The split limit, as an integer:
  + `0` or negative disables splitting, and every clause is forwarded unmodified.
  + `1` is invalid, as splitting would not terminate.
  + Any integer of at least `2` bounds the width of a final chunk, while each earlier chunk has one further literal for the atom linking it to the next chunk.
- The count of reserved atoms: atoms the caller may use, and so atoms which are never issued by the encoder.

```rust
# use cnf_split::config::{Config, SplitLimit};
let mut config = Config::default();
assert_eq!(config.split_limit(), Ok(SplitLimit::Unbounded));

config.split_limit.value = 4;
assert_eq!(config.split_limit(), Ok(SplitLimit::Width(4)));

config.split_limit.value = 1;
assert!(config.split_limit().is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::ConfigError,
};

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// The split limit, see [SplitLimit] for the interpretation.
    pub split_limit: ConfigOption<isize>,

    /// Atoms `1..=reserved_atoms` are reserved for the caller.
    pub reserved_atoms: ConfigOption<Atom>,
}

impl Default for Config {
    /// Splitting is disabled by default, and no atoms are reserved.
    fn default() -> Self {
        Config {
            split_limit: ConfigOption {
                name: "split_limit",
                min: isize::MIN,
                max: ATOM_MAX as isize,
                value: 0,
            },

            reserved_atoms: ConfigOption {
                name: "reserved_atoms",
                min: 0,
                max: ATOM_MAX,
                value: 0,
            },
        }
    }
}

impl Config {
    /// The split limit of the configuration, or an error if the limit is unworkable.
    pub fn split_limit(&self) -> Result<SplitLimit, ConfigError> {
        match self.split_limit.in_bounds() {
            true => SplitLimit::try_from(self.split_limit.value),
            false => Err(ConfigError::InvalidSplitLimit(self.split_limit.value)),
        }
    }

    /// The count of reserved atoms, or an error if the count is beyond the representation of a literal.
    pub fn reserved_atoms(&self) -> Result<Atom, ConfigError> {
        match self.reserved_atoms.in_bounds() {
            true => Ok(self.reserved_atoms.value),
            false => Err(ConfigError::InvalidReservation(self.reserved_atoms.value)),
        }
    }
}

/// The maximum width of a clause forwarded by an encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitLimit {
    /// Splitting is disabled.
    Unbounded,

    /// The width of a final chunk, always at least two.
    Width(usize),
}

impl TryFrom<isize> for SplitLimit {
    type Error = ConfigError;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        match value {
            ..=0 => Ok(SplitLimit::Unbounded),
            1 => Err(ConfigError::InvalidSplitLimit(value)),
            _ => Ok(SplitLimit::Width(value as usize)),
        }
    }
}

impl std::fmt::Display for SplitLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Width(width) => write!(f, "{width}"),
        }
    }
}
