use leptos::logging::warn;
use leptos::*;
use std::fmt::Display;
use std::str::FromStr;

/// A set of radio buttons bound to one optional choice.
///
/// Each option's `Display` form is its radio `value`; the checked value is
/// read back through `FromStr`.
#[component]
pub fn RadioGroup<T>(
    /// Shared `name` of the radios. Must be unique per form instance.
    #[prop(into)]
    name: String,
    #[prop(into)] aria_label: String,
    options: Vec<(T, &'static str)>,
    #[prop(into)] value: Signal<Option<T>>,
    #[prop(into)] on_change: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Display + FromStr + 'static,
    T::Err: Display,
{
    let handle_change = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<T>() {
            Ok(choice) => on_change.call(choice),
            Err(err) => warn!("[SURVEY] Ignoring radio value {:?}: {}", raw, err),
        }
    };

    view! {
        <div role="radiogroup" aria-label=aria_label class="survey-radio-group">
            {options
                .into_iter()
                .map(|(option, text)| {
                    view! {
                        <label class="survey-radio">
                            <input
                                type="radio"
                                name=name.clone()
                                value=option.to_string()
                                prop:checked=move || value.get() == Some(option)
                                on:change=handle_change
                            />
                            {text}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
