use dioxus::prelude::*;

/// Page body below the fixed header, with an optional heading.
#[component]
pub fn Page(
    class: Option<&'static str>,
    heading: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "pt-24 p-4 {class}",
            if let Some(heading) = heading {
                h1 {
                    class: "text-lg sm:text-2xl mb-6",
                    "{heading}"
                }
            }
            {children}
        }
    )
}
