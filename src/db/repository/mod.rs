pub mod caretaker;
pub mod doctor;
pub mod old_age_home;
pub mod patient;
pub mod prescription;
pub mod report;
