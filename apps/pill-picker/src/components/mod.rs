pub mod help_bar;
pub mod pill_picker;
pub mod screen;

// Re-export core Component trait
pub use redpill::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use pill_picker::{PillPicker, PillPickerProps};
pub use screen::{PillScreen, PillScreenProps};
