//! # Mesh Kernel
//!
//! Minimal editable quad mesh: vertices, edges, faces with per-face
//! material slots and per-loop UVs, plus the primitives the sweep
//! extruder and path instancer need (planar face creation, boundary
//! edge selection, edge extrusion, vertex welding, rigid transforms).
//!
//! All geometry calculations use f64 internally. Export to f32 only
//! happens at the host boundary for GPU rendering.
//!
//! ## Handles
//!
//! Edges and faces are addressed through generation-checked handles.
//! Welding renumbers vertices and therefore bumps the mesh generation;
//! using a handle taken before a weld fails with
//! [`MeshError::StaleHandle`] instead of silently pointing at the wrong
//! element.

use crate::error::MeshError;
use config::constants::{approx_equal, EPSILON};
use glam::{DMat4, DVec2, DVec3};
use road_profile::UvRect;

/// Which side of the cross-section to scan for a boundary edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Toward -x.
    Left,
    /// Toward +x.
    Right,
}

/// Generation-checked reference to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeHandle {
    index: u32,
    generation: u32,
}

/// Generation-checked reference to a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    verts: [u32; 2],
    /// Whether this edge is part of the current outer boundary of the
    /// cross-section. Extrusion retires the consumed edge and enrolls
    /// the new far edge.
    boundary: bool,
}

/// A quad face: a simple closed loop of four vertex indices with a
/// material slot and one UV per loop corner.
///
/// Loop order is always (bottom-right, top-right, top-left,
/// bottom-left) relative to the face's own extrusion step, matching
/// the UV winding convention.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Vertex indices in loop order.
    pub verts: [u32; 4],
    /// Index into the mesh's material slots.
    pub material: u32,
    /// One texture coordinate per loop corner.
    pub uv: [DVec2; 4],
}

/// An editable quad mesh.
///
/// # Example
///
/// ```rust
/// use road_mesh::{Mesh, Side};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let face = mesh.add_planar_face(7.4, 2.0, DVec3::ZERO).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// let edge = mesh.boundary_edge(Side::Left).unwrap();
/// let _ = (face, edge);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    material_slots: Vec<String>,
    generation: u32,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the ordered material slot names.
    #[inline]
    pub fn material_slots(&self) -> &[String] {
        &self.material_slots
    }

    /// Replaces the ordered material slot list.
    pub fn set_material_slots(&mut self, slots: Vec<String>) {
        self.material_slots = slots;
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a boundary edge between two existing vertices.
    pub fn add_edge(&mut self, a: u32, b: u32) -> EdgeHandle {
        self.add_edge_flagged(a, b, true)
    }

    fn add_edge_flagged(&mut self, a: u32, b: u32, boundary: bool) -> EdgeHandle {
        let index = self.edges.len() as u32;
        self.edges.push(Edge {
            verts: [a, b],
            boundary,
        });
        EdgeHandle {
            index,
            generation: self.generation,
        }
    }

    /// Returns the endpoint indices of an edge.
    pub fn edge_vertices(&self, handle: EdgeHandle) -> Result<[u32; 2], MeshError> {
        self.check_edge(handle)?;
        Ok(self.edges[handle.index as usize].verts)
    }

    /// Returns the face behind a handle.
    pub fn face(&self, handle: FaceHandle) -> Result<&Face, MeshError> {
        if handle.generation != self.generation {
            return Err(MeshError::stale_handle(format!(
                "face {} from generation {}, mesh is at {}",
                handle.index, handle.generation, self.generation
            )));
        }
        self.faces
            .get(handle.index as usize)
            .ok_or_else(|| MeshError::invalid_topology(format!("no face {}", handle.index)))
    }

    fn check_edge(&self, handle: EdgeHandle) -> Result<(), MeshError> {
        if handle.generation != self.generation {
            return Err(MeshError::stale_handle(format!(
                "edge {} from generation {}, mesh is at {}",
                handle.index, handle.generation, self.generation
            )));
        }
        if handle.index as usize >= self.edges.len() {
            return Err(MeshError::invalid_topology(format!(
                "no edge {}",
                handle.index
            )));
        }
        Ok(())
    }

    /// Creates an axis-aligned rectangular face in the z = `origin.z`
    /// plane, centered on `origin.x` and starting at `origin.y`.
    ///
    /// Spans x in `[origin.x - width/2, origin.x + width/2]` and y in
    /// `[origin.y, origin.y + length]`. The two side edges (constant x)
    /// join the boundary set; the start/end edges do not.
    pub fn add_planar_face(
        &mut self,
        width: f64,
        length: f64,
        origin: DVec3,
    ) -> Result<FaceHandle, MeshError> {
        if width < EPSILON || length < EPSILON {
            return Err(MeshError::degenerate(format!(
                "planar face must have positive extent, got {width} x {length}"
            )));
        }

        let half = width / 2.0;
        let br = self.add_vertex(DVec3::new(origin.x + half, origin.y, origin.z));
        let tr = self.add_vertex(DVec3::new(origin.x + half, origin.y + length, origin.z));
        let tl = self.add_vertex(DVec3::new(origin.x - half, origin.y + length, origin.z));
        let bl = self.add_vertex(DVec3::new(origin.x - half, origin.y, origin.z));

        self.add_edge_flagged(br, tr, true); // right side
        self.add_edge_flagged(bl, tl, true); // left side
        self.add_edge_flagged(br, bl, false); // start
        self.add_edge_flagged(tr, tl, false); // end

        let index = self.faces.len() as u32;
        self.faces.push(Face {
            verts: [br, tr, tl, bl],
            material: 0,
            uv: [DVec2::ZERO; 4],
        });
        Ok(FaceHandle {
            index,
            generation: self.generation,
        })
    }

    /// Selects the outermost boundary edge on the given side.
    ///
    /// Candidates are boundary edges whose two endpoints share the same
    /// x coordinate (edges running along the road axis). Among those the
    /// edge with the minimum x (Left) or maximum x (Right) wins; on an x
    /// tie the edge with the lower z wins. The tie must resolve to the
    /// lower edge, otherwise UV assignment of subsequent steps would
    /// misalign.
    pub fn boundary_edge(&self, side: Side) -> Option<EdgeHandle> {
        let mut best: Option<(u32, f64, f64)> = None; // (index, x, min z)

        for (i, edge) in self.edges.iter().enumerate() {
            if !edge.boundary {
                continue;
            }
            let a = self.vertices[edge.verts[0] as usize];
            let b = self.vertices[edge.verts[1] as usize];
            if !approx_equal(a.x, b.x) {
                continue;
            }
            let x = a.x;
            let z = a.z.min(b.z);

            let replace = match best {
                None => true,
                Some((_, best_x, best_z)) => {
                    if approx_equal(x, best_x) {
                        z < best_z
                    } else {
                        match side {
                            Side::Left => x < best_x,
                            Side::Right => x > best_x,
                        }
                    }
                }
            };
            if replace {
                best = Some((i as u32, x, z));
            }
        }

        best.map(|(index, _, _)| EdgeHandle {
            index,
            generation: self.generation,
        })
    }

    /// Creates one new quad face by sweeping an edge by `translation`.
    ///
    /// The two source vertices are shared (welded by construction); two
    /// new vertices, the far edge, and two rung edges are added. The
    /// source edge leaves the boundary set, the far edge joins it.
    ///
    /// The face loop starts at the source endpoint with the lower y, so
    /// loop order is (bottom-right, top-right, top-left, bottom-left)
    /// relative to this step and UV assignment lines up.
    ///
    /// Fails with `DegenerateGeometry` if `translation` is the zero
    /// vector, and with `StaleHandle` if the edge handle predates a
    /// weld.
    pub fn extrude_edge(
        &mut self,
        handle: EdgeHandle,
        translation: DVec3,
    ) -> Result<FaceHandle, MeshError> {
        self.check_edge(handle)?;
        if translation.length_squared() < EPSILON * EPSILON {
            return Err(MeshError::degenerate(
                "extrusion by the zero vector produces a zero-area face",
            ));
        }

        let [a, b] = self.edges[handle.index as usize].verts;
        // Normalize loop start to the lower-y endpoint.
        let (v0, v1) = if self.vertices[a as usize].y <= self.vertices[b as usize].y {
            (a, b)
        } else {
            (b, a)
        };

        let v0_far = self.add_vertex(self.vertices[v0 as usize] + translation);
        let v1_far = self.add_vertex(self.vertices[v1 as usize] + translation);

        self.edges[handle.index as usize].boundary = false;
        self.add_edge_flagged(v0_far, v1_far, true);
        self.add_edge_flagged(v0, v0_far, false);
        self.add_edge_flagged(v1, v1_far, false);

        let index = self.faces.len() as u32;
        self.faces.push(Face {
            verts: [v0, v1, v1_far, v0_far],
            material: 0,
            uv: [DVec2::ZERO; 4],
        });
        Ok(FaceHandle {
            index,
            generation: self.generation,
        })
    }

    /// Sets a face's material slot and its four loop UVs.
    ///
    /// The UV rect corners are applied in loop order, so the fixed
    /// (bottom-right, top-right, top-left, bottom-left) winding holds
    /// on every face.
    pub fn assign_material_uv(
        &mut self,
        handle: FaceHandle,
        material: u32,
        uv: &UvRect,
    ) -> Result<(), MeshError> {
        if handle.generation != self.generation {
            return Err(MeshError::stale_handle(format!(
                "face {} from generation {}, mesh is at {}",
                handle.index, handle.generation, self.generation
            )));
        }
        if material as usize >= self.material_slots.len() {
            return Err(MeshError::invalid_topology(format!(
                "material slot {material} not registered (have {})",
                self.material_slots.len()
            )));
        }
        let face = self
            .faces
            .get_mut(handle.index as usize)
            .ok_or_else(|| MeshError::invalid_topology(format!("no face {}", handle.index)))?;
        face.material = material;
        face.uv = uv.corners();
        Ok(())
    }

    /// Merges coincident vertices within `tolerance` and returns how
    /// many vertices were removed.
    ///
    /// Edges and faces are remapped; edges collapsed to a point and
    /// exact duplicate edges are dropped, as are faces left with a
    /// repeated vertex. Invalidates all outstanding handles.
    pub fn weld_vertices(&mut self, tolerance: f64) -> usize {
        let old_count = self.vertices.len();
        let mut kept: Vec<DVec3> = Vec::with_capacity(old_count);
        let mut remap: Vec<u32> = Vec::with_capacity(old_count);

        for &v in &self.vertices {
            let found = kept
                .iter()
                .position(|&k| (k - v).length_squared() <= tolerance * tolerance);
            match found {
                Some(i) => remap.push(i as u32),
                None => {
                    remap.push(kept.len() as u32);
                    kept.push(v);
                }
            }
        }

        let removed = old_count - kept.len();
        self.vertices = kept;

        let mut seen_pairs: std::collections::HashSet<(u32, u32)> = std::collections::HashSet::new();
        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let a = remap[edge.verts[0] as usize];
            let b = remap[edge.verts[1] as usize];
            if a == b {
                continue; // collapsed to a point
            }
            let key = (a.min(b), a.max(b));
            if !seen_pairs.insert(key) {
                continue; // duplicate of a previously kept edge
            }
            edges.push(Edge {
                verts: [a, b],
                boundary: edge.boundary,
            });
        }
        self.edges = edges;

        let mut faces = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            let verts = face.verts.map(|v| remap[v as usize]);
            let repeated = (0..4).any(|i| (i + 1..4).any(|j| verts[i] == verts[j]));
            if repeated {
                continue;
            }
            faces.push(Face { verts, ..*face });
        }
        self.faces = faces;

        self.generation += 1;
        removed
    }

    /// Appends another mesh's geometry, offsetting its indices.
    ///
    /// Material slots must agree; the merged faces keep their material
    /// ids and UVs.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);

        for edge in &other.edges {
            self.edges.push(Edge {
                verts: [edge.verts[0] + offset, edge.verts[1] + offset],
                boundary: edge.boundary,
            });
        }
        for face in &other.faces {
            self.faces.push(Face {
                verts: face.verts.map(|v| v + offset),
                ..*face
            });
        }
        if self.material_slots.is_empty() {
            self.material_slots = other.material_slots.clone();
        }
    }

    /// Remaps every vertex position through `f`.
    ///
    /// Topology is untouched; used for curve deformation, where the
    /// mapping is not an affine transform.
    pub fn map_vertices(&mut self, mut f: impl FnMut(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Rotates the mesh about the vertical (z) axis through the origin.
    pub fn rotate_z(&mut self, radians: f64) {
        self.transform(&DMat4::from_rotation_z(radians));
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All edge and face indices reference existing vertices
    /// - No face loop repeats a vertex
    /// - Face materials reference registered slots
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for edge in &self.edges {
            if edge.verts[0] >= vertex_count || edge.verts[1] >= vertex_count {
                return false;
            }
        }
        for face in &self.faces {
            for v in face.verts {
                if v >= vertex_count {
                    return false;
                }
            }
            let verts = face.verts;
            if (0..4).any(|i| (i + 1..4).any(|j| verts[i] == verts[j])) {
                return false;
            }
            if !self.material_slots.is_empty() && face.material as usize >= self.material_slots.len()
            {
                return false;
            }
        }
        true
    }

    /// Splits every quad into two triangles.
    ///
    /// Returns flattened triangle index triples, winding preserved.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            let [a, b, c, d] = face.verts;
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
        triangles
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 6);
        for tri in self.triangulate() {
            result.extend_from_slice(&tri);
        }
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
