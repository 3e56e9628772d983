pub mod mesh;
pub mod page;
pub mod params;

pub use mesh::PageMesh;
pub use page::{FLAT_SEGMENTS, LENGTH_SEGMENTS, build_page};
pub use params::{GeometryError, PageParams};
