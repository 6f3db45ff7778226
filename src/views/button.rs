use dioxus::prelude::*;

/// Shared button used by the sidebar and the friend rows. Forms keep
/// their own plain submit buttons.
#[component]
pub fn Button(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "button",
            onclick: move |event| onclick.call(event),
            {children}
        }
    }
}
