//! # Global runtime configuration.
//!
//! Provides [`Config`], centralized settings for the supervisor runtime.
//!
//! ## Sentinel values
//! - `results_capacity = 0` → sized to the number of commands (one slot each)

use std::borrow::Cow;

/// Global configuration for the supervisor runtime.
///
/// Defines:
/// - **Log identity**: the tag used for the supervisor's own log lines
/// - **Channel sizing**: capacity of the completion results channel
///
/// ## Field semantics
/// - `label`: tag for the supervisor's own lines, printed with id `0`. It is
///   also the baseline for the shared column width, so no padded line ever
///   starts before the supervisor's own messages.
/// - `results_capacity`: completion channel capacity (`0` = one slot per
///   launched command, so no launch task ever blocks on delivery).
#[derive(Clone, Debug)]
pub struct Config {
    /// Tag used for the supervisor's own log lines.
    pub label: Cow<'static, str>,

    /// Capacity of the completion results channel.
    ///
    /// - `0` = sized to the number of commands
    /// - `n > 0` = fixed capacity of `n`
    pub results_capacity: usize,
}

impl Config {
    /// Returns the supervisor's log tag.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the results channel capacity for `commands` launched commands.
    ///
    /// The sentinel `0` resolves to one slot per command (minimum 1), so every
    /// launch task can deliver its result without waiting on the consumer.
    #[inline]
    pub fn results_capacity_for(&self, commands: usize) -> usize {
        if self.results_capacity == 0 {
            commands.max(1)
        } else {
            self.results_capacity
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `label = "parallel"` (the reference tag)
    /// - `results_capacity = 0` (one slot per command)
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("parallel"),
            results_capacity: 0,
        }
    }
}
