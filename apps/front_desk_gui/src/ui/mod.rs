//! UI layer for the front desk: app shell, clock panel, visitor table, and
//! the sign-in modal.

pub mod app;

pub use app::FrontDeskApp;
