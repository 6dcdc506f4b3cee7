pub mod drill;
pub mod moves;
pub mod position;
pub mod realm;
pub mod record;
