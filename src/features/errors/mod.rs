mod error_conversions;
mod error_responses;
