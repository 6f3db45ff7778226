//! Bill splitting arithmetic
//!
//! The split form keeps its numbers in a [`SplitDraft`] while the user
//! types. The counterpart share is always derived from the other two
//! fields and the submitted result is a single signed delta for the
//! selected friend's balance.

/// Who settles the bill
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    /// The user pays, the friend owes their share
    #[default]
    User,
    /// The friend pays, the user owes their share
    Friend,
}

impl Payer {
    /// Value carried by the payer `select` options
    pub fn as_value(&self) -> &'static str {
        match self {
            Payer::User => "user",
            Payer::Friend => "friend",
        }
    }

    /// Parses the `select` value, anything unknown falls back to the user
    pub fn from_value(value: &str) -> Self {
        match value {
            "friend" => Payer::Friend,
            _ => Payer::User,
        }
    }
}

/// Transient content of the split form, scoped to one selected friend and
/// discarded on submit or when the selection changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDraft {
    bill_total: Option<f64>,
    user_share: Option<f64>,
    payer: Payer,
}

impl SplitDraft {
    pub fn set_bill_total(&mut self, value: Option<f64>) {
        self.bill_total = value;
    }

    /// Updates the user's share, entries above the bill total are ignored
    /// and the previous value stays.
    pub fn set_user_share(&mut self, value: Option<f64>) {
        match (value, self.bill_total) {
            (Some(share), Some(bill)) if share > bill => {}
            _ => self.user_share = value,
        }
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    pub fn get_bill_total(&self) -> Option<f64> {
        self.bill_total
    }

    pub fn get_user_share(&self) -> Option<f64> {
        self.user_share
    }

    pub fn get_payer(&self) -> Payer {
        self.payer
    }

    /// The friend's share, never edited directly. Empty until a bill total
    /// is entered, an unset user share counts as 0.
    pub fn counterpart_share(&self) -> Option<f64> {
        self.bill_total
            .map(|bill| bill - self.user_share.unwrap_or(0.0))
    }

    /// Signed amount to add to the selected friend's balance.
    ///
    /// `None` while the draft is incomplete or inconsistent, submission is
    /// refused instead of ever producing a NaN.
    pub fn balance_delta(&self) -> Option<f64> {
        let bill = self.bill_total?;
        let user = self.user_share?;
        if bill < 0.0 || user < 0.0 || user > bill {
            return None;
        }
        Some(match self.payer {
            Payer::User => bill - user,
            Payer::Friend => -user,
        })
    }
}
