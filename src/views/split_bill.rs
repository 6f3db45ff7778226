use dioxus::prelude::*;

use crate::split::{Payer, SplitDraft};
use crate::state::Friend;

// bill total and own share in, one signed balance delta out, the
// container applies it to the selected friend and clears the selection
#[component]
pub fn SplitBillForm(friend: Friend, on_split: EventHandler<f64>) -> Element {
    let mut draft = use_signal(SplitDraft::default);

    let bill_total = number_value(draft.read().get_bill_total());
    let user_share = number_value(draft.read().get_user_share());
    let counterpart = number_value(draft.read().counterpart_share());
    let payer = draft.read().get_payer();

    rsx! {
        form {
            class: "form-split-bill",
            onsubmit: move |event| {
                event.prevent_default();
                if let Some(delta) = draft.read().balance_delta() {
                    on_split.call(delta);
                }
            },
            h2 { "Split a bill with {friend.name}" }

            label { "💰 Bill value" }
            input {
                r#type: "number",
                min: "0",
                required: true,
                value: "{bill_total}",
                oninput: move |event| {
                    let value = event.value();
                    if value.is_empty() {
                        draft.write().set_bill_total(None);
                    } else if let Ok(amount) = value.parse::<f64>() {
                        draft.write().set_bill_total(Some(amount));
                    }
                },
            }

            label { "🧍‍♀️ Your expense" }
            input {
                r#type: "number",
                min: "0",
                max: "{bill_total}",
                required: true,
                value: "{user_share}",
                oninput: move |event| {
                    let value = event.value();
                    if value.is_empty() {
                        draft.write().set_user_share(None);
                    } else if let Ok(amount) = value.parse::<f64>() {
                        draft.write().set_user_share(Some(amount));
                    }
                },
            }

            label { "👫 {friend.name}'s expense" }
            input { r#type: "number", disabled: true, value: "{counterpart}" }

            label { "🤑 Who is paying the bill?" }
            select {
                value: "{payer.as_value()}",
                onchange: move |event| {
                    draft.write().set_payer(Payer::from_value(&event.value()));
                },
                option { value: "user", "You" }
                option { value: "friend", "{friend.name}" }
            }

            button { class: "button", r#type: "submit", "Split bill" }
        }
    }
}

// unset fields render as an empty input, not as 0
fn number_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
