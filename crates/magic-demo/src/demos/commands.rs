//! Demo name parsing

use anyhow::{anyhow, Result};

/// Available demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Fixed, defaulted and variadic parameters
    Functions,
    /// The `Computer` type's operator behaviour
    Magic,
    /// Save, drop and reload through the persistence codec
    Pickle,
    /// Every demo, in order
    All,
}

impl Demo {
    /// The individual demos, in the order [`Demo::All`] runs them
    pub const EACH: [Demo; 3] = [Demo::Functions, Demo::Magic, Demo::Pickle];
}

/// Parse a demo name into a [`Demo`]
pub fn parse_demo(input: &str) -> Result<Demo> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(anyhow!("Empty demo name"));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "functions" | "function" | "fn" | "args" => Ok(Demo::Functions),
        "magic" | "computer" | "methods" => Ok(Demo::Magic),
        "pickle" | "persist" | "save" => Ok(Demo::Pickle),
        "all" => Ok(Demo::All),
        other => Err(anyhow!("Unknown demo: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_functions() {
        assert_eq!(parse_demo("functions").unwrap(), Demo::Functions);
        assert_eq!(parse_demo("fn").unwrap(), Demo::Functions);
    }

    #[test]
    fn test_parse_magic_and_pickle() {
        assert_eq!(parse_demo("Magic").unwrap(), Demo::Magic);
        assert_eq!(parse_demo(" computer ").unwrap(), Demo::Magic);
        assert_eq!(parse_demo("pickle").unwrap(), Demo::Pickle);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_demo("").is_err());
        assert!(parse_demo("threads").is_err());
    }

    #[test]
    fn test_each_excludes_all() {
        assert_eq!(Demo::EACH.len(), 3);
        assert!(!Demo::EACH.contains(&Demo::All));
    }
}
