use crate::ui::UiError;
use std::fmt;

/// Errors returned by [`ScreenManager`](super::ScreenManager)
#[derive(Debug)]
pub enum ScreenError {
    /// Mode switch, score update or button lookup before `start` succeeded
    NotStarted,

    /// `start` called on a manager whose screens are already built
    AlreadyStarted,

    /// The toolkit failed while building the screens
    Ui(UiError),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScreenError::NotStarted => write!(f, "Screens have not been started"),
            ScreenError::AlreadyStarted => write!(f, "Screens were already started"),
            ScreenError::Ui(e) => write!(f, "UI error: {}", e),
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Ui(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UiError> for ScreenError {
    fn from(err: UiError) -> Self {
        ScreenError::Ui(err)
    }
}

impl From<ScreenError> for String {
    fn from(error: ScreenError) -> Self {
        error.to_string()
    }
}
