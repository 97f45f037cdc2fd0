pub mod header;
pub mod icon;
pub mod layout;
pub mod modal;
pub mod modal_system;
pub mod page;
pub mod story;

pub use header::Header;
pub use layout::Layout;
pub use modal::{Modal, ModalAction, ModalVariant};
pub use modal_system::ModalSystem;
pub use page::Page;
pub use story::StoryCard;
