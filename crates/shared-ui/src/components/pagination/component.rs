use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-based pagination controls with Previous/Next buttons.
///
/// `page` is 1-based; the component clamps its own writes to
/// `[1, total_pages]`. Renders nothing when there are no pages.
#[component]
pub fn Pagination(total_pages: usize, mut page: Signal<usize>) -> Element {
    if total_pages == 0 {
        return rsx! {};
    }
    let current = (*page.read()).clamp(1, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            if current > 1 {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = (*page.read()).clamp(1, total_pages);
                        page.set(current - 1);
                    },
                    "Previous"
                }
            }
            span { class: "pagination-info",
                "Page {current} of {total_pages}"
            }
            if current < total_pages {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = (*page.read()).clamp(1, total_pages);
                        page.set(current + 1);
                    },
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[component]
    fn MiddlePage() -> Element {
        let page = use_signal(|| 2usize);
        rsx! {
            Pagination { total_pages: 3, page }
        }
    }

    #[component]
    fn EmptyPager() -> Element {
        let page = use_signal(|| 1usize);
        rsx! {
            Pagination { total_pages: 0, page }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn middle_page_shows_both_directions() {
        let html = render(MiddlePage);
        assert!(html.contains("Page 2 of 3"), "{html}");
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn zero_pages_renders_nothing() {
        assert_eq!(render(EmptyPager), "");
    }
}
