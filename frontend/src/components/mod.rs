pub mod feature_showcase;
pub mod signup_form;
