use dioxus::prelude::*;

use crate::state::{Friend, FriendId};
use crate::views::Button;

// show all friends as a vertical card list
#[component]
pub fn FriendsList(
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    on_select: EventHandler<FriendId>,
) -> Element {
    rsx! {
        ul {
            for friend in friends.iter() {
                FriendRow {
                    key: "{friend.id}",
                    friend: friend.clone(),
                    is_selected: selected.as_deref() == Some(friend.id.as_str()),
                    on_select,
                }
            }
        }
    }
}

#[component]
pub fn FriendRow(friend: Friend, is_selected: bool, on_select: EventHandler<FriendId>) -> Element {
    let friend_id = friend.id.clone();

    rsx! {
        li { class: if is_selected { "selected" },
            img { src: "{friend.avatar_url}", alt: "{friend.name}" }
            h3 { "{friend.name}" }
            p { class: "{friend.balance_class()}", "{friend.balance_label()}" }
            Button {
                onclick: move |_| on_select.call(friend_id.clone()),
                if is_selected { "Close" } else { "Select" }
            }
        }
    }
}
