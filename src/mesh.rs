//! Triangle mesh representation and OBJ loading.
//!
//! A [`Mesh`] holds vertex positions, optional vertex normals, and the
//! triangular faces indexing into them. Meshes are loaded from Wavefront
//! OBJ files; all objects in a file are flattened into a single mesh.

use thiserror::Error;

use crate::math::vec3::Vec3;
use crate::math::EPSILON;

/// Normal used when a face has no usable normal of its own.
pub const DEFAULT_NORMAL: Vec3 = Vec3::FORWARD;

/// Errors that can occur while loading a mesh.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The OBJ file could not be opened or parsed.
    #[error("cannot load {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
}

/// A triangular face, as indices into the mesh's vertex and normal lists.
///
/// All indices are zero-based. Normal indices are resolved leniently
/// through [`Mesh::normal`]; vertex indices must be valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub normals: [usize; 3],
}

/// A triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a mesh from its raw parts.
    ///
    /// # Panics
    /// Panics in debug builds if a face's vertex index is out of bounds.
    pub fn new(vertices: Vec<Vec3>, normals: Vec<Vec3>, faces: Vec<Face>) -> Self {
        debug_assert!(
            faces
                .iter()
                .flat_map(|f| f.vertices)
                .all(|v| v < vertices.len()),
            "Face vertex index out of bounds"
        );
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Load a mesh from an OBJ file.
    ///
    /// All objects/groups in the file are flattened into one mesh, with
    /// indices offset past previously loaded geometry. Faces are
    /// triangulated during loading; point and line records are skipped.
    pub fn from_obj(path: &str) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                ignore_points: true,
                ignore_lines: true,
                ..Default::default()
            },
        )
        .map_err(|source| LoadError::Obj {
            path: path.to_string(),
            source,
        })?;

        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let vertex_offset = vertices.len();
            let normal_offset = normals.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            normals.extend(
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2])),
            );

            // Faces without a normal stream reuse their position indices;
            // lookups that still miss resolve to the default normal.
            let has_normal_indices = mesh.normal_indices.len() == mesh.indices.len();
            for (i, tri) in mesh.indices.chunks_exact(3).enumerate() {
                let raw = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
                let face_normals = if has_normal_indices {
                    let n = &mesh.normal_indices[3 * i..3 * i + 3];
                    [
                        n[0] as usize + normal_offset,
                        n[1] as usize + normal_offset,
                        n[2] as usize + normal_offset,
                    ]
                } else {
                    [
                        raw[0] + normal_offset,
                        raw[1] + normal_offset,
                        raw[2] + normal_offset,
                    ]
                };
                faces.push(Face {
                    vertices: [
                        raw[0] + vertex_offset,
                        raw[1] + vertex_offset,
                        raw[2] + vertex_offset,
                    ],
                    normals: face_normals,
                });
            }
        }

        log::info!(
            "Loaded OBJ: {} verts, {} faces",
            vertices.len(),
            faces.len()
        );
        Ok(Self::new(vertices, normals, faces))
    }

    /// Returns true when the mesh has no faces to rasterize.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Look up a vertex normal, falling back to [`DEFAULT_NORMAL`] when the
    /// index misses (out of range, or the mesh carries no normals at all).
    #[inline]
    pub fn normal(&self, index: usize) -> Vec3 {
        self.normals.get(index).copied().unwrap_or(DEFAULT_NORMAL)
    }

    /// Translate the mesh to its vertex centroid and scale it to fit the
    /// NDC cube.
    ///
    /// The centroid is the arithmetic mean of the vertex positions. The
    /// scale factor is `2.0 / largest bounding box extent`, so the widest
    /// axis spans exactly [-1, 1] around the centroid. Near-zero extents
    /// (a single point, coincident vertices) center without scaling.
    pub fn center_and_scale(&mut self) {
        if self.vertices.is_empty() {
            return;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        let mut center = Vec3::ZERO;
        for v in &self.vertices {
            center = center + *v;
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        center = center / self.vertices.len() as f32;

        let extent = (max.x - min.x).max(max.y - min.y).max(max.z - min.z);
        let scale = if extent < EPSILON { 1.0 } else { 2.0 / extent };

        for v in &mut self.vertices {
            *v = (*v - center) * scale;
        }
    }
}
