//! Ready-made configurations used by the showcase.

pub mod add_role;
pub mod complex_document;
pub mod contact;

pub use add_role::{add_role_config, ADD_ROLE_MODAL_ID};
pub use complex_document::{complex_document_config, COMPLEX_DOCUMENT_MODAL_ID};
pub use contact::{contact_config, CONTACT_MODAL_ID};
