pub mod id;
pub mod phone;
