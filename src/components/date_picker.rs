use crate::models::date_bounds::{self, DateBounds};
use chrono::NaiveDate;
use leptos::logging::{log, warn};
use leptos::*;
use web_sys::HtmlInputElement;

/// Date input limited to `bounds`.
///
/// Out-of-range or unreadable text never reaches `on_change`; the input is
/// put back to the last accepted value instead. Clearing the input reports
/// `None`.
///
/// Browsers with a native date control only ever report `YYYY-MM-DD` or `""`.
/// Browsers that fall back to a plain text box report what was typed, which
/// is where `MM/dd/yyyy` and malformed text come from.
#[component]
pub fn DatePicker(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    #[prop(into)] bounds: Signal<DateBounds>,
    #[prop(into)] on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    let handle_change = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        match bounds.get_untracked().accept(&text) {
            Ok(date) => {
                log!("[DATE] Accepted {:?}", date);
                on_change.call(date);
            }
            Err(err) => {
                warn!("[DATE] Rejected {:?}: {}", text, err);
                let input = event_target::<HtmlInputElement>(&ev);
                let previous = value
                    .get_untracked()
                    .map(date_bounds::input_value)
                    .unwrap_or_default();
                input.set_value(&previous);
            }
        }
    };

    view! {
        <div class="survey-date-field">
            <input
                type="date"
                id=id
                name="date"
                class="survey-date"
                aria-label="change date"
                min=move || date_bounds::input_value(bounds.get().min)
                max=move || date_bounds::input_value(bounds.get().max)
                prop:value=move || value.get().map(date_bounds::input_value).unwrap_or_default()
                on:change=handle_change
            />
            <span class="survey-date-echo">
                {move || value.get().map(date_bounds::format_date).unwrap_or_default()}
            </span>
        </div>
    }
}
