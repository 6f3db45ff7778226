//! Web interface components for the Ardoise application
//!
//! This module contains the Dioxus components that make up the single
//! screen of the app: the friends sidebar with its add-friend form, the
//! bill splitting form and the shared button.

/// Root container owning the friend registry
mod app;
pub use app::App;

/// Friends sidebar components
mod friends;
pub use friends::{FriendRow, FriendsList};

/// New friend form component
mod add_friend;
pub use add_friend::AddFriendForm;

/// Bill splitting form component
mod split_bill;
pub use split_bill::SplitBillForm;

/// Shared button component
mod button;
pub use button::Button;
