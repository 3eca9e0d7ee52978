pub mod bookings;
pub mod not_found;
