pub mod home;
pub mod modal_stories;
pub mod modal_system_stories;
pub mod not_found;

pub use home::Home;
pub use modal_stories::ModalStories;
pub use modal_system_stories::ModalSystemStories;
pub use not_found::NotFound;
