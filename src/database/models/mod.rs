pub mod expense;
pub mod income;
pub mod user;

pub use expense::{FixedExpense, VariableExpense};
pub use income::Income;
pub use user::User;
