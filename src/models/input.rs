use serde::{Deserialize, Deserializer, Serialize};

/// One of the three analyzer input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Income,
    Expenses,
    Savings,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Expenses => "expenses",
            Field::Savings => "savings",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monthly figures exactly as the user typed them.
///
/// Forms send text. JSON clients may also send plain numbers, which are kept
/// as their decimal text and validated like typed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub income: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub expenses: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub savings: Option<String>,
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

impl RawInput {
    pub fn new(income: &str, expenses: &str, savings: &str) -> Self {
        Self {
            income: Some(income.to_string()),
            expenses: Some(expenses.to_string()),
            savings: Some(savings.to_string()),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Income => self.income.as_deref(),
            Field::Expenses => self.expenses.as_deref(),
            Field::Savings => self.savings.as_deref(),
        }
    }
}

/// Validated monthly figures: all finite, income non-zero.
///
/// Only produced by [`crate::services::insights::parse_input`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedInput {
    income: f64,
    expenses: f64,
    savings: f64,
}

impl ParsedInput {
    pub(crate) fn new(income: f64, expenses: f64, savings: f64) -> Self {
        Self {
            income,
            expenses,
            savings,
        }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn expenses(&self) -> f64 {
        self.expenses
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_input_accepts_text_and_numbers() {
        let raw: RawInput = serde_json::from_str(
            r#"{"income": 50000, "expenses": "35000", "savings": 10000.5}"#,
        )
        .unwrap();
        assert_eq!(raw.get(Field::Income), Some("50000"));
        assert_eq!(raw.get(Field::Expenses), Some("35000"));
        assert_eq!(raw.get(Field::Savings), Some("10000.5"));
    }

    #[test]
    fn test_raw_input_missing_and_null_fields() {
        let raw: RawInput = serde_json::from_str(r#"{"income": null}"#).unwrap();
        assert_eq!(raw, RawInput::default());
    }

    #[test]
    fn test_raw_input_rejects_other_json_types() {
        assert!(serde_json::from_str::<RawInput>(r#"{"income": true}"#).is_err());
    }
}
