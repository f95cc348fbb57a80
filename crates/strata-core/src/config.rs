/// Configuration for converting raw binding parameters into render states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub invalid_codes: CodePolicy,
}

impl Config {
    /// Configuration that substitutes defaults for unknown codes.
    pub fn lenient() -> Self {
        Config {
            invalid_codes: CodePolicy::Fallback,
        }
    }
}

/// What to do with a blend factor or equation code outside the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePolicy {
    /// Fail the conversion with an invalid-argument error
    #[default]
    Reject,
    /// Replace the code with the matching field of the default blend mode
    /// and log a warning
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects() {
        assert_eq!(Config::default().invalid_codes, CodePolicy::Reject);
        assert_eq!(Config::lenient().invalid_codes, CodePolicy::Fallback);
    }
}
