pub mod booking;
pub mod events;
pub mod notification;
pub mod payment;
