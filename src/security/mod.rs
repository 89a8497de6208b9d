mod path;


pub use path::{ResourcePath, ResourcePathError, RESOURCE_PREFIX};
