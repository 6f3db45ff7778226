use dioxus::prelude::*;

use crate::state::{AppState, Friend, FriendId};
use crate::views::{AddFriendForm, Button, FriendsList, SplitBillForm};

// root container: the sidebar on the left, the split form on the right
// once a friend is selected
#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);

    let friends = state.read().get_friends().to_vec();
    let selected_id = state.read().get_selected_id().cloned();
    let selected_friend = state.read().get_selected_friend().cloned();
    let show_add_friend = state.read().is_add_friend_open();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        div { class: "app",
            div { class: "sidebar",
                FriendsList {
                    friends,
                    selected: selected_id,
                    on_select: move |id: FriendId| {
                        state.write().toggle_selection(&id);
                    },
                }
                if show_add_friend {
                    AddFriendForm {
                        on_add: move |friend: Friend| {
                            state.write().add_friend(friend);
                        },
                    }
                }
                Button {
                    onclick: move |_| state.write().toggle_add_friend(),
                    if show_add_friend { "Close" } else { "Add friend" }
                }
            }
            if let Some(friend) = selected_friend {
                SplitBillForm {
                    key: "{friend.id}",
                    friend: friend.clone(),
                    on_split: move |delta: f64| {
                        let selected = state.read().get_selected_id().cloned();
                        if let Some(id) = selected {
                            state.write().apply_balance_delta(&id, delta);
                        }
                    },
                }
            }
        }
    }
}
