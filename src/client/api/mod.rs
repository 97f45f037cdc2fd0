pub mod contact;
pub mod helper;
pub mod notification;
pub mod user;
