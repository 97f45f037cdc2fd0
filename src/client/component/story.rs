use dioxus::prelude::*;
use pulldown_cmark::{html, Parser};

/// Renders Markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// One story: a title, a Markdown description and the live example.
#[component]
pub fn StoryCard(title: &'static str, description: &'static str, children: Element) -> Element {
    let description = markdown_to_html(description);

    rsx!(
        div {
            class: "card bg-base-200 mb-6",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "{title}"
                }
                div {
                    class: "prose prose-sm max-w-none",
                    dangerous_inner_html: "{description}",
                }
                div {
                    class: "card-actions mt-2",
                    {children}
                }
            }
        }
    )
}
