use std::error;
use std::fmt;

/// Error reported by the achievement runtime when it rejects an activation.
///
/// The runtime speaks in integer result codes; `code` is its native non-zero
/// code, kept verbatim so callers can tell runtime rejections apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    pub code: i32,
    pub message: String,
}

impl RuntimeError {
    pub fn new(code: i32, message: &str) -> RuntimeError {
        RuntimeError {
            code,
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Runtime error {}: {}", self.code, self.message)
    }
}

impl error::Error for RuntimeError {}

/// The achievement/rich-presence engine this crate feeds.
///
/// Activation registers a trigger definition with the engine so it starts
/// being evaluated against emulator state. The engine owns all trigger
/// evaluation; this crate only hands it parsed definitions. Activations for
/// one response must be issued sequentially, which `&mut self` enforces.
pub trait AchievementRuntime {
    /// Registers an achievement trigger under `id`. `definition` is the
    /// trigger's condition macro, opaque to this layer.
    fn activate_achievement(&mut self, id: u32, definition: &str) -> Result<(), RuntimeError>;

    /// Registers the rich-presence script describing what the running
    /// content is currently doing.
    fn activate_rich_presence(&mut self, script: &str) -> Result<(), RuntimeError>;
}
