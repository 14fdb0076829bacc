pub mod cow;
pub mod dataset;
pub mod fortune;
pub mod prelude;

pub use cow::{Cow, Presenter};
pub use dataset::{Fortune, Fortunes};
pub use fortune::{filter, fortune_message, message, select_random, NO_FORTUNE};
