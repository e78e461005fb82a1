pub mod caretaker;
pub mod doctor;
pub mod enums;
pub mod old_age_home;
pub mod patient;
pub mod prescription;
pub mod report;

pub use caretaker::*;
pub use doctor::*;
pub use enums::*;
pub use old_age_home::*;
pub use patient::*;
pub use prescription::*;
pub use report::*;
