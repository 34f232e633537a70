use serde::Serialize;

/// A configuration option, with the bounds within which the value of the option is meaningful.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether the value of the option is within the bounds of the option.
    pub fn in_bounds(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }
}
