use super::tree::ElementId;
use std::fmt;

/// Errors raised by the UI toolkit while building or querying element trees
#[derive(Debug)]
pub enum UiError {
    /// Sprite name not present in the atlas
    SpriteNotFound(String),

    /// Element handle doesn't belong to this tree
    UnknownElement(ElementId),

    /// Element already has a parent (every element lives in exactly one tree)
    AlreadyAttached(ElementId),

    /// Tried to attach a child under an element that can't hold one
    NotAContainer(ElementId),

    /// Tried to read or write text on a non-text element
    NotText(ElementId),

    /// Attaching would make an element its own ancestor
    CycleDetected(ElementId),

    /// Atlas description couldn't be read
    AtlasIo(std::io::Error),

    /// Atlas description isn't valid JSON for an atlas
    AtlasParse(serde_json::Error),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UiError::SpriteNotFound(name) => write!(f, "Sprite not found in atlas: {}", name),
            UiError::UnknownElement(id) => write!(f, "Unknown UI element: {:?}", id),
            UiError::AlreadyAttached(id) => write!(f, "UI element {:?} already has a parent", id),
            UiError::NotAContainer(id) => write!(f, "UI element {:?} can't hold children", id),
            UiError::NotText(id) => write!(f, "UI element {:?} is not a text block", id),
            UiError::CycleDetected(id) => {
                write!(f, "Attaching {:?} would create a cycle", id)
            }
            UiError::AtlasIo(e) => write!(f, "Failed to read atlas: {}", e),
            UiError::AtlasParse(e) => write!(f, "Failed to parse atlas: {}", e),
        }
    }
}

impl std::error::Error for UiError {}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::AtlasIo(err)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::AtlasParse(err)
    }
}

impl From<UiError> for String {
    fn from(error: UiError) -> Self {
        error.to_string()
    }
}
