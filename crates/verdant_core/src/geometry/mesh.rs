//! CPU-side triangle mesh: positions, texture coordinates, optional normals
//! and `u16` triangle indices, held together in one owned value.
//!
//! A `Mesh` can only be obtained through [`Mesh::new`], which validates every
//! invariant and allocates all storage up front.  Either the whole mesh is
//! returned or an error is; a half-filled mesh is never observable.
//!
//! Lifecycle: build → `Renderer::upload_mesh` (generates normals when none
//! were supplied) → draw → [`Mesh::release`].
use std::collections::TryReserveError;

use glam::{Vec2, Vec3};
use thiserror::Error;

/// Largest vertex count addressable by `u16` indices.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("failed to allocate mesh storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        index: u16,
        position: usize,
        vertex_count: usize,
    },
    #[error("{texcoords} texture coordinates supplied for {vertices} vertices")]
    TexcoordMismatch { vertices: usize, texcoords: usize },
    #[error("{normals} normals supplied for {vertices} vertices")]
    NormalMismatch { vertices: usize, normals: usize },
    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
    #[error("{0} vertices cannot be addressed by 16-bit indices")]
    TooManyVertices(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    indices: Vec<u16>,
}

impl Mesh {
    /// Validates and copies the supplied tables into a new mesh without
    /// normals.
    pub fn new(vertices: &[Vec3], texcoords: &[Vec2], indices: &[u16]) -> Result<Self, MeshError> {
        if vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices(vertices.len()));
        }
        if texcoords.len() != vertices.len() {
            return Err(MeshError::TexcoordMismatch {
                vertices: vertices.len(),
                texcoords: texcoords.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle(indices.len()));
        }
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertices.len())
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count: vertices.len(),
            });
        }

        Ok(Self {
            vertices: try_copy(vertices)?,
            texcoords: try_copy(texcoords)?,
            normals: Vec::new(),
            indices: try_copy(indices)?,
        })
    }

    /// Attaches explicit per-vertex normals, replacing any existing ones.
    pub fn with_normals(mut self, normals: &[Vec3]) -> Result<Self, MeshError> {
        if normals.len() != self.vertices.len() {
            return Err(MeshError::NormalMismatch {
                vertices: self.vertices.len(),
                normals: normals.len(),
            });
        }
        self.normals = try_copy(normals)?;
        Ok(self)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    /// Per-vertex normals; empty until supplied or generated.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty() && self.normals.len() == self.vertices.len()
    }

    /// Iterates the index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes smooth, area-weighted vertex normals from triangle winding.
    ///
    /// Counter-clockwise triangles face the viewer.  A vertex referenced by no
    /// triangle (or only by degenerate ones) keeps a zero normal.
    pub fn generate_normals(&mut self) -> Result<(), MeshError> {
        let mut normals = Vec::new();
        normals.try_reserve_exact(self.vertices.len())?;
        normals.resize(self.vertices.len(), Vec3::ZERO);

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let e1 = self.vertices[b] - self.vertices[a];
            let e2 = self.vertices[c] - self.vertices[a];
            // magnitude = 2 × triangle area
            let n = e1.cross(e2);
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }

        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
        Ok(())
    }

    /// Frees all CPU-side storage.  Calling it again is a no-op.
    pub fn release(&mut self) {
        self.vertices = Vec::new();
        self.texcoords = Vec::new();
        self.normals = Vec::new();
        self.indices = Vec::new();
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }
}

fn try_copy<T: Copy>(src: &[T]) -> Result<Vec<T>, MeshError> {
    let mut out = Vec::new();
    out.try_reserve_exact(src.len())?;
    out.extend_from_slice(src);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::new(
            &[Vec3::ZERO, Vec3::X, Vec3::Y],
            &[Vec2::ZERO, Vec2::X, Vec2::Y],
            &[0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn counts() {
        let m = triangle();
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.triangle_count(), 1);
        assert!(!m.has_normals());
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = Mesh::new(&[Vec3::ZERO; 3], &[Vec2::ZERO; 3], &[0, 1, 3]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange { index: 3, position: 2, vertex_count: 3 }
        ));
    }

    #[test]
    fn rejects_partial_triangle() {
        let err = Mesh::new(&[Vec3::ZERO; 3], &[Vec2::ZERO; 3], &[0, 1]).unwrap_err();
        assert!(matches!(err, MeshError::IncompleteTriangle(2)));
    }

    #[test]
    fn rejects_misaligned_texcoords() {
        let err = Mesh::new(&[Vec3::ZERO; 3], &[Vec2::ZERO; 2], &[0, 1, 2]).unwrap_err();
        assert!(matches!(err, MeshError::TexcoordMismatch { vertices: 3, texcoords: 2 }));
    }

    #[test]
    fn ccw_triangle_faces_positive_z() {
        let mut m = triangle();
        m.generate_normals().unwrap();
        assert!(m.has_normals());
        for n in m.normals() {
            assert!((*n - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn unreferenced_vertex_keeps_zero_normal() {
        let mut m = Mesh::new(
            &[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE],
            &[Vec2::ZERO; 4],
            &[0, 1, 2],
        )
        .unwrap();
        m.generate_normals().unwrap();
        assert_eq!(m.normals()[3], Vec3::ZERO);
    }

    #[test]
    fn explicit_normals_must_match_vertex_count() {
        assert!(triangle().with_normals(&[Vec3::Y; 2]).is_err());
        assert!(triangle().with_normals(&[Vec3::Y; 3]).unwrap().has_normals());
    }

    #[test]
    fn vertex_count_is_capped_at_u16_range() {
        let n = MAX_VERTICES;
        let full = Mesh::new(&vec![Vec3::ZERO; n], &vec![Vec2::ZERO; n], &[0, 1, u16::MAX]).unwrap();
        assert_eq!(full.vertex_count(), 65_536);

        let err = Mesh::new(&vec![Vec3::ZERO; n + 1], &vec![Vec2::ZERO; n + 1], &[0, 1, 2]).unwrap_err();
        assert!(matches!(err, MeshError::TooManyVertices(65_537)));
    }

    #[test]
    fn release_is_idempotent() {
        let mut m = triangle();
        m.release();
        assert!(m.is_released());
        assert_eq!(m.triangle_count(), 0);
        m.release();
        assert!(m.is_released());
    }
}
