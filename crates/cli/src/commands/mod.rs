pub mod dump;
pub mod functions;
pub mod info;
pub mod lookup;
pub mod symbols;

pub use dump::*;
pub use functions::*;
pub use info::*;
pub use lookup::*;
pub use symbols::*;
