mod note;

pub use note::{Note, DEFAULT_COLOR};
