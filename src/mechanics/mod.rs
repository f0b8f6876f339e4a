pub mod bias;
pub mod perimeter;
pub mod stoch;

pub use bias::*;
pub use perimeter::*;
