pub mod booking;
pub mod draft;
pub mod store;
pub mod validation;

pub use booking::{AppointmentBookingService, PendingBooking};
pub use draft::BookingDraft;
pub use store::{reduce, AppointmentAction, AppointmentState, AppointmentStore};
pub use validation::{is_valid_email, validate_form};
