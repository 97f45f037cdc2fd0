use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaCalendar, FaCheck, FaCircleInfo, FaEye, FaFloppyDisk, FaListCheck, FaMagnifyingGlass,
        FaPaperclip, FaPen, FaPlus, FaStar, FaTrash, FaUser, FaXmark,
    },
    Icon,
};

use crate::client::component::modal_system::config::IconName;

/// Renders a configuration icon by name.
#[component]
pub fn NamedIcon(name: IconName, size: Option<u32>) -> Element {
    let size = size.unwrap_or(16);

    match name {
        IconName::Plus => rsx!(Icon { width: size, height: size, icon: FaPlus }),
        IconName::Pen => rsx!(Icon { width: size, height: size, icon: FaPen }),
        IconName::Eye => rsx!(Icon { width: size, height: size, icon: FaEye }),
        IconName::Trash => rsx!(Icon { width: size, height: size, icon: FaTrash }),
        IconName::Paperclip => rsx!(Icon { width: size, height: size, icon: FaPaperclip }),
        IconName::Search => rsx!(Icon { width: size, height: size, icon: FaMagnifyingGlass }),
        IconName::Calendar => rsx!(Icon { width: size, height: size, icon: FaCalendar }),
        IconName::User => rsx!(Icon { width: size, height: size, icon: FaUser }),
        IconName::Tasks => rsx!(Icon { width: size, height: size, icon: FaListCheck }),
        IconName::Star => rsx!(Icon { width: size, height: size, icon: FaStar }),
        IconName::Check => rsx!(Icon { width: size, height: size, icon: FaCheck }),
        IconName::Close => rsx!(Icon { width: size, height: size, icon: FaXmark }),
        IconName::Save => rsx!(Icon { width: size, height: size, icon: FaFloppyDisk }),
        IconName::Info => rsx!(Icon { width: size, height: size, icon: FaCircleInfo }),
    }
}
