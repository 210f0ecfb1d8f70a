pub mod approval;
pub mod clock;
pub mod log;
pub mod pattern;
pub mod record;
pub mod settings;
pub mod shift;
pub mod summary;
