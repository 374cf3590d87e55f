pub mod new;
pub mod search;
