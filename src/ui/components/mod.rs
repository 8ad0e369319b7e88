mod dialog;
mod file_picker;
mod footer;
mod header;
mod identity_step;
mod key_hints;
mod nav_bar;
mod placeholder_step;
mod progress_bar;
mod text_input;
mod theme;
mod toast;

pub use dialog::{DialogFrame, StatusLine};
pub use file_picker::{FilePicker, FilePickerState};
pub use footer::Footer;
pub use header::{Header, SKIP_LABEL, SUBTITLE, TITLE};
pub use identity_step::{IdentityStepView, STEP_TITLE};
pub use key_hints::{hints_for, render_key_hints, KeyHintBarStyle};
pub use nav_bar::{NavBar, BACK_LABEL, CONTINUE_LABEL, SUBMIT_LABEL};
pub use placeholder_step::PlaceholderStepView;
pub use progress_bar::ProgressBar;
pub use text_input::TextInput;
pub use theme::*;
pub use toast::{ToastState, ToastView};
