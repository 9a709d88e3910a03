/// Demo host for the survey form.
/// Keeps the latest snapshot the form reports and only lets the respondent
/// submit once that snapshot is valid.
use crate::components::purchase_survey_form::PurchaseSurveyForm;
use crate::models::{AnswerRecord, SurveyChange};
use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::*;

#[component]
pub fn SurveyPage(#[prop(optional)] initial_values: Option<AnswerRecord>) -> impl IntoView {
    let (latest, set_latest) = create_signal(None::<SurveyChange>);
    let (submitted, set_submitted) = create_signal(None::<AnswerRecord>);

    let can_submit = move || latest.with(|change| change.is_some_and(|c| c.is_valid));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(change) = latest.get_untracked().filter(|c| c.is_valid) else {
            warn!("[SURVEY] Submit ignored, answers are incomplete");
            return;
        };
        match serde_json::to_string(&change.values) {
            Ok(json) => log!("[SURVEY] Submitted answers: {}", json),
            Err(err) => warn!("[SURVEY] Could not serialize answers: {}", err),
        }
        set_submitted.set(Some(change.values));
    };

    view! {
        <form class="survey-page" on:submit=handle_submit>
            <PurchaseSurveyForm
                initial_values=initial_values.unwrap_or_default()
                on_change=move |change: SurveyChange| set_latest.set(Some(change))
            />
            <button type="submit" prop:disabled=move || !can_submit()>{ "Submit" }</button>
        </form>
        {move || submitted.get().map(|answers| view! {
            <p class="survey-thanks">{ thank_you(&answers) }</p>
        })}
    }
}

fn thank_you(answers: &AnswerRecord) -> String {
    match (answers.product, answers.rating) {
        (Some(product), Some(rating)) => format!(
            "Thanks! You rated {} as \"{}\".",
            product,
            rating.text().to_lowercase()
        ),
        _ => "Thanks for your answers!".to_string(),
    }
}
