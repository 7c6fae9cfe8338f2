pub mod checkin;
pub mod doctor;
pub mod health;
