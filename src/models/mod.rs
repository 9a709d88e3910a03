pub mod answers;
pub mod blank;
pub mod date_bounds;
pub mod product;
pub mod rating;
pub mod yes_no;

pub use answers::{AnswerRecord, FieldEdit, SurveyChange, Validator};
pub use date_bounds::DateBounds;
pub use product::Product;
pub use rating::Rating;
pub use yes_no::YesNo;
