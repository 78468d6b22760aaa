pub mod language_picker;

pub use language_picker::LanguagePicker;
