pub mod entities;
pub mod intake_guard;
pub mod policies;
