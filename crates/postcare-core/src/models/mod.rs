pub mod checkin;
pub mod medicine;
pub mod patient;
pub mod report;
