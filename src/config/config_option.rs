/// A configuration option, with bounds on the value of the option.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by the CLI.
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option to `value`, if `value` is within the bounds of the option, and otherwise returns `value` back.
    pub fn set(&mut self, value: T) -> Result<(), T> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(value)
        }
    }
}
