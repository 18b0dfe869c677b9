pub mod admin;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod student;

use dioxus::prelude::*;

use admin::AdminDashboard;
use landing::Landing;
use login::Login;
use not_found::NotFound;
use signup::Signup;
use student::StudentDashboard;

/// Application routes: a flat path-to-page table. There are no route
/// guards; the only role-sensitive navigation is the redirect issued
/// right after a successful login.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/studentDashboard")]
    StudentDashboard {},
    #[route("/adminDashboard")]
    AdminDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
