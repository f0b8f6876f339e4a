pub mod sdk;
pub mod walk;
