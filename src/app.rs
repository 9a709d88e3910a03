/// Root of the purchase survey site.
/// Provides page metadata and routes `/` to the survey page.
use crate::components::survey_page::SurveyPage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/purchase-survey.css"/>
        <Title text="Purchase Survey"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <SurveyPage/> }/>
                </Routes>
            </main>
        </Router>
    }
}
