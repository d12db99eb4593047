//! The `Computer` type
//!
//! A toy object whose behaviour hangs off the standard operator traits:
//! `Display`/`Debug` for text, `Ord` for comparison, `Index` for reads and
//! `IntoIterator` for loops. Writes go through [`Computer::set`], which grows
//! the peripheral list instead of failing.

use std::{cmp::Ordering, fmt, ops::Index};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{args::CallError, value::Value};

/// Filler written into positions skipped by an out-of-range write
pub const PLACEHOLDER: &str = "empty slot";

#[derive(Clone, Serialize, Deserialize)]
pub struct Computer {
    platform: String,
    memory: i64,
    peripherals: Option<Vec<String>>,
}

impl Computer {
    /// A computer without a peripheral list
    pub fn new(platform: impl Into<String>, memory: i64) -> Self {
        Self {
            platform: platform.into(),
            memory,
            peripherals: None,
        }
    }

    /// A computer owning a copy of the given peripherals
    pub fn with_peripherals<I, S>(platform: impl Into<String>, memory: i64, peripherals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            platform: platform.into(),
            memory,
            peripherals: Some(peripherals.into_iter().map(Into::into).collect()),
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn memory(&self) -> i64 {
        self.memory
    }

    pub fn peripherals(&self) -> Option<&[String]> {
        self.peripherals.as_deref()
    }

    /// Number of peripheral slots, placeholders included
    pub fn len(&self) -> usize {
        self.peripherals.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Use the computer as a function.
    ///
    /// An integer is added to the memory size; anything else is appended to
    /// it as text, as in `1024_mouse`. A sum outside `i64` is an error.
    pub fn call(&self, arg: &Value) -> Result<Value, CallError> {
        match arg {
            Value::Int(n) => self
                .memory
                .checked_add(*n)
                .map(Value::Int)
                .ok_or(CallError::IntegerOverflow {
                    left: self.memory,
                    right: *n,
                }),
            other => Ok(Value::Str(format!("{}_{}", self.memory, other))),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.peripherals.as_deref().unwrap_or(&[]).iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|p| p == name)
    }

    /// Peripheral at `index`, or `""` when there is none
    pub fn get(&self, index: usize) -> &str {
        self.peripherals
            .as_ref()
            .and_then(|p| p.get(index))
            .map_or("", String::as_str)
    }

    /// Store `value` at `index`, padding with [`PLACEHOLDER`] when `index` is
    /// past the end.
    ///
    /// Returns whether the list grew, which includes a write at exactly the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the list cannot hold `index + 1` slots, e.g. for
    /// `usize::MAX`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        let peripherals = self.peripherals.get_or_insert_with(Vec::new);
        let grew = index >= peripherals.len();
        if grew {
            let placeholders = index - peripherals.len();
            let new_len = index
                .checked_add(1)
                .unwrap_or_else(|| panic!("peripheral index {index} out of range"));
            peripherals.resize(new_len, PLACEHOLDER.to_string());
            debug!(
                platform = %self.platform,
                index,
                placeholders,
                len = peripherals.len(),
                "grew peripheral list"
            );
        }
        peripherals[index] = value.into();
        grew
    }

    /// Developer-facing rendering
    pub fn repr(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "computer object; platform: {}; memory: {}",
            self.platform, self.memory
        )
    }
}

impl fmt::Debug for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "computer(platform='{}', memory={})",
            self.platform, self.memory
        )
    }
}

// Computers compare by memory size alone.
impl PartialEq for Computer {
    fn eq(&self, other: &Self) -> bool {
        self.memory == other.memory
    }
}

impl Eq for Computer {}

impl PartialOrd for Computer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Computer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.memory.cmp(&other.memory)
    }
}

impl Index<usize> for Computer {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.get(index)
    }
}

impl<'a> IntoIterator for &'a Computer {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newpc() -> Computer {
        Computer::with_peripherals(
            "x86",
            1024,
            ["mouse", "keyboard", "monitor", "bluetooth dongle", "usb flash drive"],
        )
    }

    #[test]
    fn test_display_and_debug() {
        let pc = Computer::new("x86", 1024);
        assert_eq!(pc.to_string(), "computer object; platform: x86; memory: 1024");
        assert_eq!(format!("{pc:?}"), "computer(platform='x86', memory=1024)");
        assert_eq!(pc.repr(), "computer(platform='x86', memory=1024)");
    }

    #[test]
    fn test_compare_by_memory() {
        let mac = Computer::new("mac", 512);
        let pc = Computer::new("x86", 1024);
        assert!(mac != pc);
        assert!(mac < pc);
        assert!(!(mac > pc));
        assert_eq!(mac.cmp(&pc), Ordering::Less);
        assert_eq!(Computer::new("arm", 1024), pc);
        assert_eq!(pc.cmp(&mac), Ordering::Greater);
    }

    #[test]
    fn test_index_reads() {
        let pc = newpc();
        assert_eq!(&pc[2], "monitor");
        assert_eq!(pc.get(3), "bluetooth dongle");
        assert_eq!(&pc[10], "");
        assert_eq!(&pc[5], "");
        assert_eq!(Computer::new("mac", 512).get(0), "");
    }

    #[test]
    fn test_set_in_range_replaces() {
        let mut pc = newpc();
        assert!(!pc.set(0, "headphones"));
        assert_eq!(&pc[0], "headphones");
        assert_eq!(pc.len(), 5);
    }

    #[test]
    fn test_set_out_of_range_grows() {
        let mut pc = Computer::with_peripherals("x86", 1024, ["mouse", "keyboard"]);
        assert!(pc.set(5, "headphones"));
        assert_eq!(pc.len(), 6);
        assert_eq!(&pc[5], "headphones");
        assert_eq!(&pc[2], PLACEHOLDER);
        assert_eq!(&pc[4], PLACEHOLDER);
        assert_eq!(&pc[1], "keyboard");
    }

    #[test]
    fn test_set_at_len_grows_without_placeholders() {
        let mut pc = Computer::with_peripherals("x86", 1024, ["mouse"]);
        assert!(pc.set(1, "keyboard"));
        assert_eq!(pc.len(), 2);
        assert_eq!(pc.peripherals(), Some(&["mouse".to_string(), "keyboard".to_string()][..]));
    }

    #[test]
    fn test_set_without_peripherals_starts_list() {
        let mut mac = Computer::new("mac", 512);
        assert!(mac.peripherals().is_none());
        assert!(mac.set(2, "trackpad"));
        assert_eq!(mac.len(), 3);
        assert_eq!(&mac[0], PLACEHOLDER);
        assert_eq!(&mac[2], "trackpad");
    }

    #[test]
    fn test_iteration_and_contains() {
        let mut pc = newpc();
        let items: Vec<&String> = pc.iter().collect();
        assert_eq!(items.len(), 5);
        assert!(!pc.contains("cd-rom"));
        pc.set(6, "cd-rom");
        assert!(pc.contains("cd-rom"));

        let mut count = 0;
        for _ in &pc {
            count += 1;
        }
        assert_eq!(count, 7);
        assert_eq!(Computer::new("mac", 512).iter().count(), 0);
        assert!(!Computer::new("mac", 512).contains("mouse"));
    }

    #[test]
    fn test_call() {
        let pc = newpc();
        assert_eq!(pc.call(&Value::Int(50)), Ok(Value::Int(1074)));
        assert_eq!(pc.call(&Value::from("mouse")), Ok(Value::from("1024_mouse")));
        let mapped: Vec<Value> = pc
            .iter()
            .map(|p| pc.call(&Value::from(p.as_str())))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(mapped[0], Value::from("1024_mouse"));
    }

    #[test]
    fn test_call_overflow_is_an_error() {
        let pc = Computer::new("x86", 1024);
        assert_eq!(
            pc.call(&Value::Int(i64::MAX)),
            Err(CallError::IntegerOverflow {
                left: 1024,
                right: i64::MAX
            })
        );
        assert_eq!(
            Computer::new("x86", -1).call(&Value::Int(i64::MIN)),
            Err(CallError::IntegerOverflow {
                left: -1,
                right: i64::MIN
            })
        );
        assert_eq!(pc.call(&Value::Int(i64::MAX - 1024)), Ok(Value::Int(i64::MAX)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_at_max_index_panics() {
        let mut pc = Computer::new("x86", 1024);
        pc.set(usize::MAX, "zip drive");
    }

    #[test]
    fn test_with_peripherals_copies_input() {
        let source = vec!["mouse".to_string()];
        let pc = Computer::with_peripherals("x86", 1024, source.iter().cloned());
        assert_eq!(source.len(), 1);
        assert_eq!(pc.peripherals().map(<[String]>::len), Some(1));
    }
}
