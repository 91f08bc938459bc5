//! Transition group configuration

/// Which transitions a group enables for its children.
///
/// # Example
///
/// ```
/// use blinc_transition::TransitionGroupConfig;
///
/// // Animate the initial children in as well, but skip exit animations
/// let config = TransitionGroupConfig::new().appear(true).exit(false);
/// assert!(config.appear);
/// assert!(config.enter);
/// assert!(!config.exit);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionGroupConfig {
    /// Run the enter transition for children present when the group is created
    pub appear: bool,
    /// Run the enter transition for children added later
    pub enter: bool,
    /// Run the exit transition for removed children
    pub exit: bool,
}

impl Default for TransitionGroupConfig {
    fn default() -> Self {
        Self {
            appear: false,
            enter: true,
            exit: true,
        }
    }
}

impl TransitionGroupConfig {
    /// Create the default configuration (enter and exit on, appear off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every transition turned off
    pub fn disabled() -> Self {
        Self {
            appear: false,
            enter: false,
            exit: false,
        }
    }

    pub fn appear(mut self, appear: bool) -> Self {
        self.appear = appear;
        self
    }

    pub fn enter(mut self, enter: bool) -> Self {
        self.enter = enter;
        self
    }

    pub fn exit(mut self, exit: bool) -> Self {
        self.exit = exit;
        self
    }
}
