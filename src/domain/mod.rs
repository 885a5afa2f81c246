mod progress;
pub mod records;
pub mod value;

pub use progress::SheetProgress;
pub use records::*;
pub use value::*;
