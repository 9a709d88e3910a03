//! The purchase survey form.
//!
//! The form owns its answer record. Every edit replaces one field, and an
//! effect then hands the whole record plus the validator's verdict to the
//! parent through `on_change`. The effect also runs once on mount, so the
//! parent always sees the initial record first.

use crate::components::{date_picker::DatePicker, radio_group::RadioGroup};
use crate::models::{
    AnswerRecord, DateBounds, FieldEdit, Product, Rating, SurveyChange, Validator, YesNo,
};
use crate::validation;
use chrono::NaiveDate;
use leptos::logging::{log, warn};
use leptos::*;
use std::str::FromStr;
use uuid::Uuid;

pub const TITLE: &str = "PLEASE TELL US WHICH PRODUCT YOU'RE PURCHASED";
pub const PRODUCT_PROMPT: &str = "Which product did you purchase ?";
pub const DATE_PROMPT: &str = "Date Purchased";
pub const USAGE_PROMPT: &str = "Have you been using this product for at least 7 days ?";

/// Reads a `<select>` value where the empty string means "nothing chosen".
fn parse_choice<T: FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

#[component]
pub fn PurchaseSurveyForm(
    /// Receives the full record and its validity after every edit.
    #[prop(into)]
    on_change: Callback<SurveyChange>,
    /// Starting answers. Defaults to all unset.
    #[prop(optional)]
    initial_values: Option<AnswerRecord>,
    /// Decides `is_valid`. Defaults to [`validation::validate`].
    #[prop(optional)]
    validator: Option<Validator>,
) -> impl IntoView {
    let validator: Validator = validator.unwrap_or(validation::validate);
    let (values, set_values) = create_signal(initial_values.unwrap_or_default());

    // Upper bound is fixed at render time. Effects only run in the browser, so
    // a hydrated page replaces the server's date with the client's before the
    // respondent can pick anything.
    let (bounds, set_bounds) = create_signal(DateBounds::today());
    create_effect(move |_| set_bounds.set(DateBounds::today()));

    let instance = Uuid::new_v4().simple().to_string();
    let product_id = format!("product-name-{instance}");
    let date_id = format!("date-picker-{instance}");
    let product_label_for = product_id.clone();
    let date_label_for = date_id.clone();

    let apply_edit = move |edit: FieldEdit| {
        log!("[SURVEY] {} edited: {:?}", edit.field_name(), edit);
        set_values.update(|record| record.apply(edit));
    };

    create_effect(move |_| {
        let change = SurveyChange::evaluate(values.get(), validator);
        log!("[SURVEY] Emitting change (valid: {})", change.is_valid);
        on_change.call(change);
    });

    let handle_product = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        match parse_choice::<Product>(&raw) {
            Ok(product) => apply_edit(FieldEdit::Product(product)),
            Err(err) => warn!("[SURVEY] Ignoring product selection: {}", err),
        }
    };

    let rating_options: Vec<(Rating, &'static str)> =
        Rating::ALL.into_iter().map(|rating| (rating, rating.text())).collect();
    let usage_options: Vec<(YesNo, &'static str)> =
        YesNo::ALL.into_iter().map(|answer| (answer, answer.label())).collect();

    view! {
        <h6 class="survey-title">{TITLE}</h6>

        <div class="survey-grid">
            <div class="survey-grid-item">
                <label class="sign-form-field" for=product_label_for>{PRODUCT_PROMPT}</label>
                <select
                    id=product_id
                    name="product"
                    class="survey-select"
                    on:change=handle_product
                >
                    <option value="" prop:selected=move || values.with(|v| v.product.is_none())></option>
                    {Product::ALL
                        .into_iter()
                        .map(|product| {
                            view! {
                                <option
                                    value=product.label()
                                    prop:selected=move || values.with(|v| v.product == Some(product))
                                >
                                    {product.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="survey-grid-item">
                <label class="sign-form-field" for=date_label_for>{DATE_PROMPT}</label>
                <DatePicker
                    id=date_id
                    value=Signal::derive(move || values.with(|v| v.date))
                    bounds=bounds
                    on_change={move |date: Option<NaiveDate>| apply_edit(FieldEdit::Date(date))}
                />
            </div>

            <div class="survey-grid-item">
                <RadioGroup
                    name=format!("rating-{instance}")
                    aria_label="rating"
                    options=rating_options
                    value=Signal::derive(move || values.with(|v| v.rating))
                    on_change={move |rating: Rating| apply_edit(FieldEdit::Rating(Some(rating)))}
                />
            </div>

            <div class="survey-grid-item">
                <div class="sign-form-field">{USAGE_PROMPT}</div>
                <RadioGroup
                    name=format!("was-used-{instance}")
                    aria_label="have using"
                    options=usage_options
                    value=Signal::derive(move || values.with(|v| v.was_used))
                    on_change={move |answer: YesNo| apply_edit(FieldEdit::WasUsed(Some(answer)))}
                />
            </div>
        </div>
    }
}
