pub mod use_booking_calendar;
pub mod use_timeout_slot;
pub mod use_toasts;

pub use use_booking_calendar::use_booking_calendar;
pub use use_timeout_slot::{use_timeout_slot, TimeoutSlot};
pub use use_toasts::{use_notify, ToastContext};
