use dioxus::prelude::*;

use crate::state::{DEFAULT_AVATAR_URL, Friend, FriendDraft};

// collect a name and an avatar URL and hand the finished record up,
// the container closes the form once the friend is in the list
#[component]
pub fn AddFriendForm(on_add: EventHandler<Friend>) -> Element {
    let mut name = use_signal(String::new);
    let mut avatar_url = use_signal(|| DEFAULT_AVATAR_URL.to_string());

    rsx! {
        form {
            class: "form-add-friend",
            onsubmit: move |event| {
                event.prevent_default();
                let draft = FriendDraft {
                    name: name.to_string(),
                    avatar_url: avatar_url.to_string(),
                };
                if let Some(friend) = draft.build() {
                    on_add.call(friend);
                }
            },
            label { "👫 Friend name" }
            input {
                r#type: "text",
                maxlength: "30",
                required: true,
                value: "{name}",
                oninput: move |event| name.set(event.value()),
            }
            label { "🌄 Image URL" }
            input {
                r#type: "text",
                required: true,
                value: "{avatar_url}",
                oninput: move |event| avatar_url.set(event.value()),
            }
            button { class: "button", r#type: "submit", "Add" }
        }
    }
}
