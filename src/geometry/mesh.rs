/// Triangle mesh as flat GPU-ready buffers: xyz position triples plus a
/// triangle index list. No normals are carried; the page is drawn as a
/// wireframe.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl PageMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
