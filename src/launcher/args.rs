//! Redpanda command-line synthesis.
use std::collections::{BTreeMap, BTreeSet};

/// Program name placed in argv[0].
pub const PROGRAM_NAME: &str = "redpanda";
/// Switch that introduces the Redpanda configuration file.
pub const CONFIG_FILE_SWITCH: &str = "--redpanda-cfg";
/// Boolean-only flags known out of the box.
pub const DEFAULT_BOOLEAN_FLAGS: &[&str] = &["overprovisioned"];

/// One launch request: config file, flags, and passthrough arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub config_file_path: String,
    /// Flag name to value. Iterated in lexicographic order so argv is reproducible.
    pub flags: BTreeMap<String, String>,
    pub extra_args: Vec<String>,
}

/// Table of flags that are either emitted bare or omitted, never given a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRules {
    boolean: BTreeSet<String>,
}

impl Default for FlagRules {
    fn default() -> Self {
        Self {
            boolean: DEFAULT_BOOLEAN_FLAGS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl FlagRules {
    /// Rules with no boolean-only flags at all.
    pub fn empty() -> Self {
        Self {
            boolean: BTreeSet::new(),
        }
    }

    /// Extend the table with additional boolean-only flag names.
    pub fn with_boolean_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean.extend(flags.into_iter().map(Into::into));
        self
    }

    pub fn is_boolean(&self, flag: &str) -> bool {
        self.boolean.contains(flag)
    }
}

/// Build the argv handed to the Redpanda binary, argv[0] included.
pub fn collect_args(config: &LaunchConfig, rules: &FlagRules) -> Vec<String> {
    let mut args = vec![
        PROGRAM_NAME.to_string(),
        CONFIG_FILE_SWITCH.to_string(),
        config.config_file_path.clone(),
    ];

    for (flag, value) in &config.flags {
        let boolean = rules.is_boolean(flag);
        if boolean && value != "true" {
            // A boolean flag is switched off by leaving it out.
            continue;
        }
        if boolean || value.is_empty() {
            args.push(format!("--{flag}"));
            continue;
        }
        args.push(format!("--{flag}={value}"));
    }

    args.extend(config.extra_args.iter().cloned());
    args
}
