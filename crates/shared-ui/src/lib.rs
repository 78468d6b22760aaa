pub mod components;

pub use components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use components::input::Input;
pub use components::label::Label;
pub use components::toast::{use_toast, ToastOptions, ToastProvider, ToastType, Toasts};
