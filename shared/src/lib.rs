use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Longest title the backend accepts (`CharField(max_length=255)`).
pub const MAX_TITLE_LENGTH: usize = 255;

/// A single recorded income or expense event, as served by
/// `GET /api/expenses/`.
///
/// The record is server-owned: the client never mutates one in place, it
/// only creates and deletes them and re-fetches the list afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier, immutable once created.
    pub id: i64,
    /// Short display string, never empty for records the form produced.
    pub title: String,
    /// Transaction amount. Kept as raw wire text, see [`Amount`].
    pub amount: Amount,
    /// Income or expense, serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Display category. Drawn from the set matching `kind` when the form
    /// created the record; not re-checked against the server's list here.
    pub category: String,
    /// Calendar date as an ISO 8601 string (`YYYY-MM-DD`).
    pub date: String,
}

/// Whether a transaction adds to or subtracts from the balance.
///
/// The wire tokens are uppercase. Anything else the server sends lands on
/// `Unknown` rather than failing the whole list; unknown records are kept
/// in the list but contribute to neither summary total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

/// Income categories offered by the form.
pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Investment", "Gift", "Other Income"];

/// Expense categories offered by the form.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Groceries",
    "Rent",
    "Utilities",
    "Transport",
    "Entertainment",
    "Debt",
    "Other Expense",
];

impl TransactionKind {
    /// Category set the form offers for this kind. The selector is
    /// repopulated from this list whenever the kind changes, which is the
    /// only place the category invariant is enforced client-side.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
            TransactionKind::Unknown => &[],
        }
    }

    /// Default category selected right after a kind change.
    pub fn default_category(self) -> &'static str {
        self.categories().first().copied().unwrap_or("")
    }

    pub fn allows_category(self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Unknown => "Unknown",
        }
    }

    /// The uppercase token this kind serializes to, for UI code that needs
    /// the wire spelling (e.g. `<option value>`).
    pub fn wire_token(self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
            TransactionKind::Unknown => "UNKNOWN",
        }
    }
}

/// Wire representation of a decimal amount.
///
/// The backend stores amounts as decimals and serializes them as JSON
/// strings, while older records and other tooling may produce plain JSON
/// numbers. Both shapes are accepted and the raw text is kept around so a
/// malformed value degrades to a zero contribution instead of sinking the
/// whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Amount(raw.into())
    }

    /// Raw wire text, untouched.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the wire text parses as a finite number.
    pub fn parsed(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Numeric value with malformed text coerced to zero. Aggregates use
    /// this so one bad record cannot take the summary down with it.
    pub fn or_zero(&self) -> f64 {
        self.parsed().unwrap_or(0.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl serde::de::Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount as a string or a number")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Amount, E> {
                Ok(Amount(value.to_owned()))
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Amount, E> {
                Ok(Amount(value.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Amount, E> {
                Ok(Amount(value.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Amount, E> {
                Ok(Amount(value.to_string()))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

/// Payload for `POST /api/expenses/` — a validated draft, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
}

/// Derived aggregate over the current transaction set. Never persisted,
/// recomputed from scratch after every successful list load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            total_income: 0.0,
            total_expense: 0.0,
            net_balance: 0.0,
        }
    }
}

/// Sum the given transactions into income and expense totals.
///
/// Pure function. Amounts that fail to parse count as zero and unknown
/// kinds are skipped outright, so `net_balance` always equals
/// `total_income - total_expense` no matter what the wire delivered.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount.or_zero(),
            TransactionKind::Expense => total_expense += transaction.amount.or_zero(),
            TransactionKind::Unknown => {}
        }
    }

    Summary {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}

/// Order transactions for display: most recent date first.
///
/// The sort is stable, so two transactions on the same date keep their
/// relative server order across re-renders. ISO 8601 dates compare
/// correctly as plain strings.
pub fn sort_for_display(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut ordered = transactions.to_vec();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

/// Outcome of local draft validation, in the shape the form consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftValidation {
    pub is_valid: bool,
    pub errors: Vec<DraftError>,
    /// Parsed amount when the input was a positive number.
    pub cleaned_amount: Option<f64>,
}

impl DraftValidation {
    /// First error message, for the single inline slot under the form.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|error| error.to_string())
    }
}

/// Local validation failures. These are terminal at the form: a draft that
/// trips any of them is never sent to the network layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("please enter a title")]
    EmptyTitle,
    #[error("title is too long ({0} characters, the limit is {MAX_TITLE_LENGTH})")]
    TitleTooLong(usize),
    #[error("please enter an amount")]
    EmptyAmount,
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    AmountNotPositive,
    #[error("please pick a date")]
    EmptyDate,
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),
    #[error("please pick a category")]
    EmptyCategory,
}

/// Validate raw form input before it becomes a [`NewTransaction`].
pub fn validate_draft(
    title: &str,
    amount_input: &str,
    date: &str,
    category: &str,
) -> DraftValidation {
    let mut errors = Vec::new();

    let title = title.trim();
    if title.is_empty() {
        errors.push(DraftError::EmptyTitle);
    } else if title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(DraftError::TitleTooLong(title.chars().count()));
    }

    let amount_input = amount_input.trim();
    let cleaned_amount = if amount_input.is_empty() {
        errors.push(DraftError::EmptyAmount);
        None
    } else {
        match amount_input.parse::<f64>() {
            Ok(value) if value > 0.0 && value.is_finite() => Some(value),
            Ok(_) => {
                errors.push(DraftError::AmountNotPositive);
                None
            }
            Err(_) => {
                errors.push(DraftError::InvalidAmount(amount_input.to_owned()));
                None
            }
        }
    };

    let date = date.trim();
    if date.is_empty() {
        errors.push(DraftError::EmptyDate);
    } else if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        errors.push(DraftError::InvalidDate(date.to_owned()));
    }

    if category.trim().is_empty() {
        errors.push(DraftError::EmptyCategory);
    }

    DraftValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_amount,
    }
}

/// Application configuration, built once at startup and passed down
/// explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL prefixed to every API path. Empty means same-origin.
    pub api_base_url: String,
    /// Name of the cookie carrying the anti-forgery token.
    pub csrf_cookie_name: String,
    /// How long a notification stays on screen.
    pub notification_duration_ms: u32,
    pub currency_symbol: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            api_base_url: String::new(),
            csrf_cookie_name: "csrftoken".to_string(),
            notification_duration_ms: 5000,
            currency_symbol: "$".to_string(),
        }
    }
}
