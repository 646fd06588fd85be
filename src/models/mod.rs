pub mod card;
pub mod list;
pub mod set;
pub mod sub;
pub mod symbol;

pub use card::*;
pub use list::*;
pub use set::*;
pub use sub::*;
pub use symbol::*;
