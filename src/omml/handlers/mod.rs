mod accent;
mod bar;
mod delim;
mod eq_arr;
mod fraction;
mod function;
mod group_char;
mod limit;
mod matrix;
mod nary;
mod radical;
mod run;
mod script;

pub use accent::AccentHandler;
pub use bar::BarHandler;
pub use delim::DelimiterHandler;
pub use eq_arr::EqArrHandler;
pub use fraction::FractionHandler;
pub use function::{FunctionHandler, FunctionNameHandler};
pub use group_char::GroupCharHandler;
pub use limit::{LimLowHandler, LimUppHandler, LimitHandler};
pub use matrix::{MatrixHandler, MatrixRowHandler};
pub use nary::NaryHandler;
pub use radical::RadicalHandler;
pub use run::RunHandler;
pub use script::{SubscriptHandler, SuperscriptHandler};
