pub mod form;
pub mod records;

pub use form::MarkAttendanceSection;
pub use records::RecordsSection;
