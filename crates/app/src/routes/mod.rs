pub mod forgot_password;
pub mod not_found;
pub mod sign_in;

use dioxus::prelude::*;

use forgot_password::ForgotPassword;
use not_found::NotFound;
use sign_in::SignIn;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    ForgotPassword {},
    #[route("/signin")]
    SignIn {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
