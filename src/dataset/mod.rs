mod builtin;
mod identity;
mod registry;


pub use builtin::{CELL_POINT_COUNT, MNIST_POINT_COUNT};
pub use identity::{DatasetIdentity, Rgb};
pub use registry::DatasetRegistry;
