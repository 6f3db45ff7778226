//! Friend registry and selection state
//!
//! Holds the list of friends shown in the sidebar, the current selection
//! and the add-friend panel flag. All mutations go through the methods on
//! [`AppState`] so the views never rewrite the list directly.

use lazy_static::lazy_static;

/// Friends are referenced by id everywhere, never by index or alias
pub type FriendId = String;

/// Placeholder avatar prefilled in the add-friend form
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// A participant in bill splitting with a running balance.
///
/// A positive balance means the friend owes the user, a negative one means
/// the user owes the friend, zero means the pair is even.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub avatar_url: String,
    pub balance: f64,
}

impl Friend {
    /// Sentence shown under the friend's name in the sidebar
    pub fn balance_label(&self) -> String {
        if self.balance > 0.0 {
            format!("{} owes you {}€", self.name, self.balance)
        } else if self.balance < 0.0 {
            format!("You owe {} {}€", self.name, -self.balance)
        } else {
            format!("You and {} are even", self.name)
        }
    }

    /// CSS class matching the label, empty when the pair is even
    pub fn balance_class(&self) -> &'static str {
        if self.balance > 0.0 {
            "green"
        } else if self.balance < 0.0 {
            "red"
        } else {
            ""
        }
    }
}

/// Transient content of the add-friend form, discarded with the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendDraft {
    pub name: String,
    pub avatar_url: String,
}

impl FriendDraft {
    /// Turns the draft into a friend with a freshly generated id.
    ///
    /// Returns `None` when either field is empty, the caller simply keeps
    /// the form open without surfacing an error.
    pub fn build(self) -> Option<Friend> {
        let id = crate::utils::generate_id();
        self.build_with_id(id)
    }

    /// Same as [`FriendDraft::build`] with the id supplied by the caller.
    pub fn build_with_id(self, id: FriendId) -> Option<Friend> {
        if self.name.is_empty() || self.avatar_url.is_empty() {
            return None;
        }
        // An untouched placeholder gets the id appended so the avatar
        // service hands out a distinct image per friend.
        let avatar_url = if self.avatar_url == DEFAULT_AVATAR_URL {
            format!("{}?u={}", self.avatar_url, id)
        } else {
            self.avatar_url
        };
        Some(Friend {
            id,
            name: self.name,
            avatar_url,
            balance: 0.0,
        })
    }
}

#[derive(Debug)]
pub struct AppState {
    // --- Registry ---
    friends: Vec<Friend>,
    // --- View state ---
    selected: Option<FriendId>,
    show_add_friend: bool,
}

impl AppState {
    /// Appends a new friend and closes the add-friend panel.
    pub fn add_friend(&mut self, friend: Friend) {
        if self.friends.iter().any(|f| f.id == friend.id) {
            log::warn!("Friend id '{}' already exists, ignoring", friend.id);
            return;
        }
        log::debug!("Friend '{}' added with balance 0", friend.name);
        self.friends.push(friend);
        self.show_add_friend = false;
    }

    /// Adds `delta` to the balance of the friend with the given id and
    /// clears the selection. An unknown id only logs a warning.
    pub fn apply_balance_delta(&mut self, id: &str, delta: f64) {
        match self.friends.iter_mut().find(|f| f.id == id) {
            Some(friend) => {
                friend.balance += delta;
                log::debug!(
                    "Applied {:+} to '{}', balance is now {}",
                    delta,
                    friend.name,
                    friend.balance
                );
            }
            None => {
                log::warn!("No friend with id '{}', delta {} dropped", id, delta);
            }
        }
        self.selected = None;
    }

    /// Selects the friend with the given id, or clears the selection when
    /// it is already the selected one. Always closes the add-friend panel.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.show_add_friend = false;
    }

    /// Opens or closes the add-friend panel.
    pub fn toggle_add_friend(&mut self) {
        self.show_add_friend = !self.show_add_friend;
    }

    pub fn get_friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get_selected_id(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    /// Looks the selection up by id, after a list update the selection
    /// follows the record and never a stale entry.
    pub fn get_selected_friend(&self) -> Option<&Friend> {
        let id = self.selected.as_deref()?;
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn is_add_friend_open(&self) -> bool {
        self.show_add_friend
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            friends: INITIAL_FRIENDS.clone(),
            selected: None,
            show_add_friend: false,
        }
    }
}

lazy_static! {
    /// Fixed sample friends loaded on every start, nothing is persisted
    static ref INITIAL_FRIENDS: Vec<Friend> = vec![
        Friend {
            id: "118836".to_string(),
            name: "Clark".to_string(),
            avatar_url: format!("{DEFAULT_AVATAR_URL}?u=118836"),
            balance: -7.0,
        },
        Friend {
            id: "933372".to_string(),
            name: "Sarah".to_string(),
            avatar_url: format!("{DEFAULT_AVATAR_URL}?u=933372"),
            balance: 20.0,
        },
        Friend {
            id: "499476".to_string(),
            name: "Anthony".to_string(),
            avatar_url: format!("{DEFAULT_AVATAR_URL}?u=499476"),
            balance: 0.0,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{Payer, SplitDraft};

    fn draft(name: &str, avatar_url: &str) -> FriendDraft {
        FriendDraft {
            name: name.to_string(),
            avatar_url: avatar_url.to_string(),
        }
    }

    #[test]
    fn test_default_state_has_seed_friends() {
        let state = AppState::default();
        let names: Vec<&str> = state.get_friends().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Clark", "Sarah", "Anthony"]);
        assert_eq!(state.get_friends()[0].balance, -7.0);
        assert_eq!(state.get_friends()[1].balance, 20.0);
        assert_eq!(state.get_friends()[2].balance, 0.0);
        assert_eq!(state.get_selected_id(), None);
        assert!(!state.is_add_friend_open());
    }

    #[test]
    fn test_add_friend_appends_with_balance_zero_and_fresh_id() {
        let mut state = AppState::default();
        let friend = draft("Diana", DEFAULT_AVATAR_URL).build().unwrap();
        let id = friend.id.clone();

        assert!(!state.get_friends().iter().any(|f| f.id == id));
        state.add_friend(friend);

        assert_eq!(state.get_friends().len(), 4);
        let added = state.get_friends().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.balance, 0.0);
    }

    #[test]
    fn test_add_friend_closes_panel() {
        let mut state = AppState::default();
        state.toggle_add_friend();
        assert!(state.is_add_friend_open());

        let friend = draft("Diana", DEFAULT_AVATAR_URL).build().unwrap();
        state.add_friend(friend);
        assert!(!state.is_add_friend_open());
    }

    #[test]
    fn test_add_friend_ignores_duplicate_id() {
        let mut state = AppState::default();
        let friend = draft("Copycat", "https://example.com/a.png")
            .build_with_id("118836".to_string())
            .unwrap();
        state.add_friend(friend);
        assert_eq!(state.get_friends().len(), 3);
        assert_eq!(state.get_friends()[0].name, "Clark");
    }

    #[test]
    fn test_draft_with_empty_name_builds_nothing() {
        assert_eq!(draft("", DEFAULT_AVATAR_URL).build(), None);
    }

    #[test]
    fn test_draft_with_empty_avatar_builds_nothing() {
        assert_eq!(draft("Diana", "").build(), None);
    }

    #[test]
    fn test_draft_appends_id_to_placeholder_avatar() {
        let friend = draft("Diana", DEFAULT_AVATAR_URL)
            .build_with_id("42".to_string())
            .unwrap();
        assert_eq!(friend.avatar_url, "https://i.pravatar.cc/48?u=42");
    }

    #[test]
    fn test_draft_keeps_custom_avatar_verbatim() {
        let friend = draft("Diana", "https://example.com/diana.png")
            .build_with_id("42".to_string())
            .unwrap();
        assert_eq!(friend.avatar_url, "https://example.com/diana.png");
    }

    #[test]
    fn test_toggle_selection_selects_then_clears() {
        let mut state = AppState::default();
        state.toggle_selection("933372");
        assert_eq!(state.get_selected_id().map(String::as_str), Some("933372"));
        state.toggle_selection("933372");
        assert_eq!(state.get_selected_id(), None);
    }

    #[test]
    fn test_toggle_selection_switches_to_other_friend() {
        let mut state = AppState::default();
        state.toggle_selection("933372");
        state.toggle_selection("499476");
        assert_eq!(state.get_selected_id().map(String::as_str), Some("499476"));
    }

    #[test]
    fn test_toggle_selection_closes_add_panel() {
        let mut state = AppState::default();
        state.toggle_add_friend();
        state.toggle_selection("933372");
        assert!(!state.is_add_friend_open());
    }

    #[test]
    fn test_selected_friend_is_looked_up_by_id() {
        let mut state = AppState::default();
        state.toggle_selection("499476");
        assert_eq!(state.get_selected_friend().unwrap().name, "Anthony");
        state.toggle_selection("499476");
        assert_eq!(state.get_selected_friend(), None);
    }

    #[test]
    fn test_apply_balance_delta_adds_and_clears_selection() {
        let mut state = AppState::default();
        state.toggle_selection("933372");
        state.apply_balance_delta("933372", 60.0);

        let sarah = state.get_friends().iter().find(|f| f.id == "933372").unwrap();
        assert_eq!(sarah.balance, 80.0);
        assert_eq!(state.get_selected_id(), None);
    }

    #[test]
    fn test_apply_balance_delta_with_unknown_id_changes_no_balance() {
        let mut state = AppState::default();
        let before: Vec<f64> = state.get_friends().iter().map(|f| f.balance).collect();
        state.apply_balance_delta("000000", 60.0);
        let after: Vec<f64> = state.get_friends().iter().map(|f| f.balance).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_balance_labels() {
        let mut state = AppState::default();
        let labels: Vec<String> = state
            .get_friends()
            .iter()
            .map(|f| f.balance_label())
            .collect();
        assert_eq!(labels[0], "You owe Clark 7€");
        assert_eq!(labels[1], "Sarah owes you 20€");
        assert_eq!(labels[2], "You and Anthony are even");

        state.apply_balance_delta("499476", 60.0);
        let anthony = state.get_friends().iter().find(|f| f.id == "499476").unwrap();
        assert_eq!(anthony.balance_label(), "Anthony owes you 60€");
        assert_eq!(anthony.balance_class(), "green");
    }

    #[test]
    fn test_split_with_anthony_end_to_end() {
        let mut state = AppState::default();
        state.toggle_selection("499476");

        let mut split = SplitDraft::default();
        split.set_bill_total(Some(100.0));
        split.set_user_share(Some(50.0));
        split.set_payer(Payer::Friend);

        let delta = split.balance_delta().unwrap();
        assert_eq!(delta, -50.0);

        let selected = state.get_selected_id().cloned().unwrap();
        state.apply_balance_delta(&selected, delta);

        let anthony = state.get_friends().iter().find(|f| f.id == "499476").unwrap();
        assert_eq!(anthony.balance, -50.0);
        assert_eq!(state.get_selected_id(), None);
        assert_eq!(state.get_selected_friend(), None);
    }
}
