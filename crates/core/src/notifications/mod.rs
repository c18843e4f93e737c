//! Notifications module - transient, auto-dismissing toasts.

mod toast_center;
mod toast_model;

pub use toast_center::ToastCenter;
pub use toast_model::{Toast, ToastKind};
