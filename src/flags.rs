use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        let table = [
            ("help", "-h", "--help", "Print this help message", false),
            ("version", "-v", "--version", "Show version information", false),
            ("config", "-c", "--config", "Run this startup file instead of ~/.burrowrc", true),
            ("quiet", "-q", "--quiet", "Suppress INFO notices", false),
            ("debug", "-d", "--debug", "Enable debug output", false),
        ];

        for (name, short, long, description, takes_value) in table {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        }

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown option {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                }
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

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: burrow [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_short_and_long_forms() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"]))?;
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
        Ok(())
    }

    #[test]
    fn test_config_takes_value() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--config", "/tmp/rc"]))?;
        assert_eq!(flags.get_value("config").map(String::as_str), Some("/tmp/rc"));

        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-c"])),
            Err(ShellError::FlagError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_option() {
        let mut flags = Flags::default();
        assert!(matches!(
            flags.parse(&args(&["--bogus"])),
            Err(ShellError::FlagError(_))
        ));
    }
}
