// Business domains
pub mod contact;
