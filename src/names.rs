//! Placeholder name generation.
//!
//! Callers constructing command text need a fresh placeholder name per
//! parameter. [`ParameterNameGenerator`] yields `p0`, `p1`, ... with a
//! configurable prefix, one generator per command-building pass.

/// Sequential placeholder name generator.
#[derive(Debug, Clone)]
pub struct ParameterNameGenerator {
    prefix: String,
    count: usize,
}

impl Default for ParameterNameGenerator {
    fn default() -> Self {
        Self::new("p")
    }
}

impl ParameterNameGenerator {
    /// Create a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// Yield the next placeholder name.
    pub fn next_name(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.count);
        self.count += 1;
        name
    }

    /// Restart numbering at zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_names() {
        let mut names = ParameterNameGenerator::default();
        assert_eq!(names.next_name(), "p0");
        assert_eq!(names.next_name(), "p1");
        assert_eq!(names.next_name(), "p2");
    }

    #[test]
    fn test_reset() {
        let mut names = ParameterNameGenerator::default();
        names.next_name();
        names.next_name();
        names.reset();
        assert_eq!(names.next_name(), "p0");
    }

    #[test]
    fn test_custom_prefix() {
        let mut names = ParameterNameGenerator::new("arg");
        assert_eq!(names.next_name(), "arg0");
        assert_eq!(names.next_name(), "arg1");
    }
}
