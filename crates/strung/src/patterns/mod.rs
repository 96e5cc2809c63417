//! Built-in pattern algorithms.

pub mod eye;
pub mod mandala;
pub mod parabola;
pub mod spiral;
pub mod star;
pub mod util;
pub mod wave;

pub use eye::Eye;
pub use mandala::Mandala;
pub use parabola::Parabola;
pub use spiral::Spiral;
pub use star::Star;
pub use wave::Wave;
