use crate::data::UploadSlot;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating the wizard and editing the active step
    #[default]
    Normal,
    /// File path prompt open for an upload slot
    PickingFile(UploadSlot),
}
