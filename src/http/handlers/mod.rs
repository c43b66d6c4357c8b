pub mod greeting;
pub mod ratings;

pub use greeting::greeting_handler;
pub use ratings::{
    create_rating_handler, get_coffee_type_list_handler, get_rating_handler,
    get_recommendation_handler,
};
