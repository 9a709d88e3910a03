//! The answer record edited by the purchase survey form, and the snapshot
//! the form hands to its parent after every edit.

use super::{Product, Rating, YesNo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pure predicate deciding whether a record may be submitted.
pub type Validator = fn(&AnswerRecord) -> bool;

/// The four survey answers. Every field is always present; `None` is the
/// unset state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(with = "super::blank", default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(with = "super::blank", default)]
    pub rating: Option<Rating>,
    #[serde(with = "super::blank", default)]
    pub was_used: Option<YesNo>,
}

/// A single-field edit coming from one form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Product(Option<Product>),
    Date(Option<NaiveDate>),
    Rating(Option<Rating>),
    WasUsed(Option<YesNo>),
}

impl FieldEdit {
    /// Name of the edited field as it appears in the JSON snapshot.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Product(_) => "product",
            FieldEdit::Date(_) => "date",
            FieldEdit::Rating(_) => "rating",
            FieldEdit::WasUsed(_) => "wasUsed",
        }
    }
}

impl AnswerRecord {
    /// Replaces exactly the field named by `edit`.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Product(product) => self.product = product,
            FieldEdit::Date(date) => self.date = date,
            FieldEdit::Rating(rating) => self.rating = rating,
            FieldEdit::WasUsed(was_used) => self.was_used = was_used,
        }
    }

    pub fn with(mut self, edit: FieldEdit) -> Self {
        self.apply(edit);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.product.is_some()
            && self.date.is_some()
            && self.rating.is_some()
            && self.was_used.is_some()
    }
}

/// Payload of the form's `on_change` callback.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyChange {
    pub values: AnswerRecord,
    pub is_valid: bool,
}

impl SurveyChange {
    /// Builds the snapshot, taking validity from `validator` alone.
    pub fn evaluate(values: AnswerRecord, validator: Validator) -> Self {
        Self {
            is_valid: validator(&values),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled() -> AnswerRecord {
        AnswerRecord {
            product: Some(Product::Product1),
            date: Some(date(2020, 2, 29)),
            rating: Some(Rating::SomewhatSatisfied),
            was_used: Some(YesNo::No),
        }
    }

    #[test]
    fn default_record_is_all_unset() {
        let record = AnswerRecord::default();
        assert_eq!(record.product, None);
        assert_eq!(record.date, None);
        assert_eq!(record.rating, None);
        assert_eq!(record.was_used, None);
        assert!(!record.is_complete());
    }

    #[test]
    fn apply_touches_only_the_edited_field() {
        let start = filled();
        let edits = [
            FieldEdit::Product(Some(Product::Product3)),
            FieldEdit::Date(None),
            FieldEdit::Rating(Some(Rating::VeryDissatisfied)),
            FieldEdit::WasUsed(Some(YesNo::Yes)),
        ];

        for edit in edits {
            let after = start.with(edit);
            let changed = [
                after.product != start.product,
                after.date != start.date,
                after.rating != start.rating,
                after.was_used != start.was_used,
            ];
            assert_eq!(
                changed.iter().filter(|c| **c).count(),
                1,
                "{} edit changed more than one field",
                edit.field_name()
            );
        }
    }

    #[test]
    fn sequence_of_edits_accumulates() {
        let mut record = AnswerRecord::default();
        record.apply(FieldEdit::Product(Some(Product::Product2)));
        record.apply(FieldEdit::WasUsed(Some(YesNo::Yes)));
        record.apply(FieldEdit::Product(None));

        assert_eq!(
            record,
            AnswerRecord {
                was_used: Some(YesNo::Yes),
                ..AnswerRecord::default()
            }
        );
    }

    #[test]
    fn unset_fields_serialize_as_sentinels() {
        let value = serde_json::to_value(AnswerRecord::default()).unwrap();
        assert_eq!(
            value,
            json!({ "product": "", "date": null, "rating": "", "wasUsed": "" })
        );
    }

    #[test]
    fn set_fields_serialize_to_wire_values() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            value,
            json!({
                "product": "Product 1",
                "date": "2020-02-29",
                "rating": "2",
                "wasUsed": "No"
            })
        );
    }

    #[test]
    fn deserializes_string_and_numeric_codes() {
        let record: AnswerRecord = serde_json::from_value(json!({
            "product": "Product 3",
            "date": null,
            "rating": 5,
            "wasUsed": ""
        }))
        .unwrap();

        assert_eq!(record.product, Some(Product::Product3));
        assert_eq!(record.date, None);
        assert_eq!(record.rating, Some(Rating::VeryDissatisfied));
        assert_eq!(record.was_used, None);
    }

    #[test]
    fn missing_fields_deserialize_as_unset() {
        let record: AnswerRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, AnswerRecord::default());
    }

    #[test]
    fn unknown_choice_fails_to_deserialize() {
        let result = serde_json::from_value::<AnswerRecord>(json!({ "product": "Product 9" }));
        assert!(result.is_err());
    }

    #[test]
    fn change_takes_validity_from_the_validator() {
        fn always(_: &AnswerRecord) -> bool {
            true
        }
        fn never(_: &AnswerRecord) -> bool {
            false
        }

        let record = AnswerRecord::default();
        assert!(SurveyChange::evaluate(record, always).is_valid);
        assert!(!SurveyChange::evaluate(filled(), never).is_valid);
        assert_eq!(SurveyChange::evaluate(filled(), never).values, filled());
    }

    #[test]
    fn change_serializes_with_camel_case_flag() {
        let change = SurveyChange {
            values: AnswerRecord::default().with(FieldEdit::Product(Some(Product::Product2))),
            is_valid: false,
        };
        assert_eq!(
            serde_json::to_value(change).unwrap(),
            json!({
                "values": { "product": "Product 2", "date": null, "rating": "", "wasUsed": "" },
                "isValid": false
            })
        );
    }
}
