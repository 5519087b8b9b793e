/// Compiler used when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "gcc";

/// Locale variables forced on the compiler so its banner is untranslated
pub const LOCALE_OVERRIDES: &[(&str, &str)] = &[
    ("LC_ALL", "C"),
    ("LC_MESSAGES", "C"),
    ("LANG", "C"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Compiler program name or path
    pub program: String,

    /// Environment overrides applied to the compiler process only
    pub env_overrides: Vec<(String, String)>,
}

impl Options {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            env_overrides: LOCALE_OVERRIDES.iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}
