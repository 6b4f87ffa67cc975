pub mod new_book;
pub mod user_recommendation;
