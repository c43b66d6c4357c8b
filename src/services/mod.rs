pub mod ratings;

pub use ratings::RatingsService;
