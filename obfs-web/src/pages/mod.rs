pub mod banks;
pub mod benefits;
pub mod entry;
pub mod foo;
pub mod home;
pub mod not_found;
