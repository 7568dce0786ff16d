/// Classification metrics over arbitrary labels
pub mod confusion;
