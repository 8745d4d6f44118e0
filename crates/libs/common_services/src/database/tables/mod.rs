pub mod attendee;
pub mod invite;
