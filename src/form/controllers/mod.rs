//! # Controllers
//!
//! `FormController` owns the form and its submit lifecycle; `AppController` runs
//! the input/render loop around it.

pub mod app_controller;
pub mod form_controller;

pub use app_controller::AppController;
pub use form_controller::FormController;
