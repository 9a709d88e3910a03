pub mod date_picker;
pub mod purchase_survey_form;
pub mod radio_group;
pub mod survey_page;
