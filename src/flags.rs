use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: Option<&'static str>,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: Option<&'static str>, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert("help", Flag::switch(Some("-h"), "--help", "Print this help message"));
        flags.insert(
            "version",
            Flag::switch(Some("-v"), "--version", "Show version information"),
        );
        flags.insert(
            "quiet",
            Flag::switch(Some("-q"), "--quiet", "Suppress diagnostics for abandoned lines"),
        );
        flags.insert("debug", Flag::switch(Some("-d"), "--debug", "Enable debug logging"));
        flags.insert("norc", Flag::switch(Some("-n"), "--norc", "Do not read ~/.uishrc"));
        flags.insert("no-color", Flag::switch(None, "--no-color", "Plain prompt"));
        flags.insert(
            "no-history",
            Flag::switch(None, "--no-history", "Do not persist ~/.uish_history"),
        );
        flags.insert(
            "max-line",
            Flag {
                short: Some("-m"),
                long: "--max-line",
                description: "Maximum input line length in characters",
                takes_value: true,
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| flag.short == Some(arg.as_str()) || flag.long == arg.as_str())
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_deref())
    }

    pub fn print_help(&self) {
        println!("Usage: uish [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let short = flag.short.unwrap_or("  ");
            let long = if flag.takes_value {
                format!("{} <N>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<16} {}", short, long, flag.description);
        }
    }
}
