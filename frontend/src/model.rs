use serde::{Deserialize, Serialize};

/// Closed set of expense classifications. The remote store serializes these
/// as the upper-case codes, and the order here is the order every summary
/// view iterates in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Housing,
    #[default]
    Food,
    Transport,
    Health,
    Personal,
    Loan,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Health,
        Category::Personal,
        Category::Loan,
        Category::Entertainment,
        Category::Other,
    ];

    /// Wire code as the remote store spells it.
    pub fn code(self) -> &'static str {
        match self {
            Category::Housing => "HOUSING",
            Category::Food => "FOOD",
            Category::Transport => "TRANSPORT",
            Category::Health => "HEALTH",
            Category::Personal => "PERSONAL",
            Category::Loan => "LOAN",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Human-facing form label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Personal => "Personal",
            Category::Loan => "Loan",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: Category,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: i64,
    pub name: String,
    pub amount_needed: f64,
    pub minimum_payment: f64,
}

/// POST body for a new expense; the remote store assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub date: String,
    pub description: String,
    pub category: Category,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    pub name: String,
    pub amount_needed: f64,
    pub minimum_payment: f64,
}

/// Unsaved expense form state. Text fields keep the raw input; amounts are
/// only parsed when the draft is turned into a request.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExpenseDraft {
    pub date: String,
    pub description: String,
    pub category: Category,
    pub amount: String,
}

impl ExpenseDraft {
    pub fn to_request(&self) -> NewExpense {
        NewExpense {
            date: self.date.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            amount: parse_amount(&self.amount),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DebtDraft {
    pub name: String,
    pub amount_needed: String,
    pub minimum_payment: String,
}

impl DebtDraft {
    pub fn to_request(&self) -> NewDebt {
        NewDebt {
            name: self.name.trim().to_string(),
            amount_needed: parse_amount(&self.amount_needed),
            minimum_payment: parse_amount(&self.minimum_payment),
        }
    }
}

/// Amount inputs coerce to 0 instead of failing: empty, non-numeric, and
/// non-finite input all land on 0.0, never NaN.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amount_parsing_coerces_bad_input_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("lunch"), 0.0);
        assert_eq!(parse_amount("12.50"), 12.50);
        assert_eq!(parse_amount(" 7 "), 7.0);
    }

    #[test]
    fn amount_parsing_never_yields_nan() {
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-inf"), 0.0);
    }

    #[test]
    fn category_codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("GROCERIES"), None);
    }

    #[test]
    fn category_serializes_as_upper_case_code() {
        assert_eq!(
            serde_json::to_value(Category::Entertainment).unwrap(),
            json!("ENTERTAINMENT")
        );
        let parsed: Category = serde_json::from_value(json!("HOUSING")).unwrap();
        assert_eq!(parsed, Category::Housing);
    }

    #[test]
    fn default_draft_category_is_food() {
        assert_eq!(ExpenseDraft::default().category, Category::Food);
    }

    #[test]
    fn expense_draft_builds_a_post_body_without_id() {
        let draft = ExpenseDraft {
            date: "2026-03-01".into(),
            description: "  groceries ".into(),
            category: Category::Food,
            amount: "42.75".into(),
        };
        let body = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "date": "2026-03-01",
                "description": "groceries",
                "category": "FOOD",
                "amount": 42.75,
            })
        );
    }

    #[test]
    fn debt_wire_format_uses_camel_case_names() {
        let debt = Debt {
            id: 3,
            name: "Car loan".into(),
            amount_needed: 5200.0,
            minimum_payment: 150.0,
        };
        let value = serde_json::to_value(&debt).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Car loan",
                "amountNeeded": 5200.0,
                "minimumPayment": 150.0,
            })
        );

        let draft = DebtDraft {
            name: "Card".into(),
            amount_needed: "not a number".into(),
            minimum_payment: "25".into(),
        };
        let body = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(body["amountNeeded"], json!(0.0));
        assert_eq!(body["minimumPayment"], json!(25.0));
    }
}
