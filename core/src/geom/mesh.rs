//! Triangle meshes.

use core::fmt::{self, Debug, Display, Formatter};

use alloc::{vec, vec::Vec};

use crate::math::Vec3;

use super::{Tri, Tri3};

/// A triangle mesh.
///
/// An object made of flat triangular faces that typically form a contiguous
/// surface. Several faces can share a vertex. The vertex positions are in
/// world space; the mesh is typically handed over by a model loader.
#[derive(Clone, Default, PartialEq)]
pub struct Mesh {
    /// The faces of the mesh, with each face a triplet of zero-based
    /// indices to the `verts` vector.
    pub faces: Vec<Tri<usize>>,
    /// The vertex positions of the mesh.
    pub verts: Vec<Vec3>,
}

/// Builder for incrementally constructing a [`Mesh`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    m: Mesh,
}

/// Error constructing a mesh from loader output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A face refers to vertex zero, which does not exist in one-based
    /// indexing.
    ZeroIndex { face: usize },
    /// A face refers to a vertex index not less than the vertex count.
    OutOfBounds { face: usize, index: usize, len: usize },
}

/// Result of constructing a mesh.
pub type Result<T> = core::result::Result<T, Error>;

impl Mesh {
    /// Creates a new triangle mesh with the given faces and vertices.
    ///
    /// Each face in `faces` is a triplet of zero-based indices, referring to
    /// the vertices in `verts` that define that face.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if any of the vertex indices in `faces`
    /// is ≥ `verts.len()`.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::geom::{Mesh, Tri};
    /// use tinyrast_core::math::vec3;
    ///
    /// let verts = [
    ///     vec3(0.0, 0.0, 0.0),
    ///     vec3(1.0, 0.0, 0.0),
    ///     vec3(0.0, 1.0, 0.0),
    ///     vec3(0.0, 0.0, 1.0),
    /// ];
    /// let faces = [
    ///     Tri([0, 1, 2]),
    ///     Tri([0, 1, 3]),
    ///     Tri([0, 2, 3]),
    ///     Tri([1, 2, 3]),
    /// ];
    /// // Create a mesh with a tetrahedral shape
    /// let tetra = Mesh::new(faces, verts).unwrap();
    /// assert_eq!(tetra.faces.len(), 4);
    /// ```
    pub fn new<F, V>(faces: F, verts: V) -> Result<Self>
    where
        F: IntoIterator<Item = Tri<usize>>,
        V: IntoIterator<Item = Vec3>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        let verts: Vec<_> = verts.into_iter().collect();

        for (face, Tri(vs)) in faces.iter().enumerate() {
            if let Some(&index) = vs.iter().find(|&&j| j >= verts.len()) {
                let len = verts.len();
                return Err(Error::OutOfBounds { face, index, len });
            }
        }
        Ok(Self { faces, verts })
    }

    /// Creates a new mesh from faces with one-based vertex indices,
    /// as used by the Wavefront OBJ format, converting them to zero-based.
    ///
    /// # Errors
    /// Returns [`Error::ZeroIndex`] if any index is zero, and
    /// [`Error::OutOfBounds`] if any index is greater than `verts.len()`.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::geom::{Mesh, Tri, mesh::Error};
    /// use tinyrast_core::math::vec3;
    ///
    /// let verts = [vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)];
    ///
    /// let m = Mesh::from_one_based([[1, 2, 3]], verts).unwrap();
    /// assert_eq!(m.faces, [Tri([0, 1, 2])]);
    ///
    /// let m = Mesh::from_one_based([[1, 2, 3], [0, 1, 2]], verts);
    /// assert_eq!(m, Err(Error::ZeroIndex { face: 1 }));
    /// ```
    pub fn from_one_based<F, V>(faces: F, verts: V) -> Result<Self>
    where
        F: IntoIterator<Item = [usize; 3]>,
        V: IntoIterator<Item = Vec3>,
    {
        let faces = faces
            .into_iter()
            .enumerate()
            .map(|(face, idcs)| {
                if idcs.contains(&0) {
                    Err(Error::ZeroIndex { face })
                } else {
                    Ok(Tri(idcs.map(|i| i - 1)))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(faces, verts)
    }

    /// Returns a new mesh builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the number of faces in `self`.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the face at index `i` as a triangle of vertex positions.
    ///
    /// # Panics
    /// If `i` ≥ the number of faces.
    pub fn tri(&self, i: usize) -> Tri3 {
        let Tri(idcs) = self.faces[i];
        Tri3(idcs.map(|j| self.verts[j]))
    }

    /// Returns an iterator over the faces of `self` as triangles of
    /// vertex positions.
    pub fn tris(&self) -> impl Iterator<Item = Tri3> + '_ {
        self.faces
            .iter()
            .map(|Tri(idcs)| Tri3(idcs.map(|j| self.verts[j])))
    }
}

impl Builder {
    /// Appends a face with the given zero-based vertex indices.
    pub fn push_face(&mut self, a: usize, b: usize, c: usize) {
        self.m.faces.push(Tri([a, b, c]));
    }

    /// Appends all the faces yielded by the given iterator.
    pub fn push_faces<Fs>(&mut self, faces: Fs)
    where
        Fs: IntoIterator<Item = [usize; 3]>,
    {
        self.m.faces.extend(faces.into_iter().map(Tri));
    }

    /// Appends a vertex with the given position.
    pub fn push_vert(&mut self, pos: Vec3) {
        self.m.verts.push(pos);
    }

    /// Appends all the vertices yielded by the given iterator.
    pub fn push_verts<Vs>(&mut self, verts: Vs)
    where
        Vs: IntoIterator<Item = Vec3>,
    {
        self.m.verts.extend(verts);
    }

    /// Returns the finished mesh containing all the added faces and vertices.
    ///
    /// # Errors
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn build(self) -> Result<Mesh> {
        // Sanity checks done by new()
        Mesh::new(self.m.faces, self.m.verts)
    }
}

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("faces", &self.faces)
            .field("verts", &self.verts)
            .finish()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroIndex { face } => {
                write!(f, "zero vertex index at face {face}")
            }
            Error::OutOfBounds { face, index, len } => write!(
                f,
                "vertex index {index} out of bounds at face {face} \
                 (vertex count {len})"
            ),
        }
    }
}

/// Returns a unit cube centered at the origin, with counter-clockwise
/// faces as seen from outside.
pub fn cube() -> Mesh {
    let verts = [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
    ]
    .map(|v| Vec3::from(v) * 0.5);
    let faces = vec![
        // -z
        Tri([0, 2, 1]),
        Tri([1, 2, 3]),
        // +z
        Tri([4, 5, 6]),
        Tri([5, 7, 6]),
        // -x
        Tri([0, 4, 2]),
        Tri([2, 4, 6]),
        // +x
        Tri([1, 3, 5]),
        Tri([3, 7, 5]),
        // -y
        Tri([0, 1, 4]),
        Tri([1, 5, 4]),
        // +y
        Tri([2, 6, 3]),
        Tri([3, 6, 7]),
    ];
    Mesh { faces, verts: verts.to_vec() }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::vec3;

    use super::*;

    fn verts() -> [Vec3; 3] {
        [vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0), vec3(2.0, 2.0, 2.0)]
    }

    #[test]
    fn mesh_new_fails_if_vertex_index_oob() {
        let m = Mesh::new([Tri([0, 1, 2]), Tri([1, 2, 3])], verts());
        assert_eq!(m, Err(Error::OutOfBounds { face: 1, index: 3, len: 3 }));
    }

    #[test]
    fn mesh_builder_fails_if_vertex_index_oob() {
        let mut b = Mesh::builder();
        b.push_faces([[0, 1, 2], [1, 2, 3]]);
        b.push_verts(verts());
        assert!(b.build().is_err());
    }

    #[test]
    fn mesh_builder_ok() {
        let mut b = Mesh::builder();
        b.push_face(0, 2, 1);
        for v in verts() {
            b.push_vert(v);
        }
        let m = b.build().unwrap();
        assert_eq!(m.num_faces(), 1);
        assert_eq!(m.tri(0), Tri3([verts()[0], verts()[2], verts()[1]]));
    }

    #[test]
    fn one_based_indices_are_normalized() {
        let m = Mesh::from_one_based([[1, 2, 3], [3, 2, 1]], verts()).unwrap();
        assert_eq!(m.faces, [Tri([0, 1, 2]), Tri([2, 1, 0])]);
    }

    #[test]
    fn one_based_index_past_end_fails() {
        let m = Mesh::from_one_based([[1, 2, 4]], verts());
        assert_eq!(m, Err(Error::OutOfBounds { face: 0, index: 3, len: 3 }));
    }

    #[test]
    fn tris_yield_positions() {
        let m = Mesh::from_one_based([[1, 2, 3]], verts()).unwrap();
        let tris: Vec<_> = m.tris().collect();
        assert_eq!(tris, [Tri3(verts())]);
    }

    #[test]
    fn cube_is_valid_and_closed() {
        let c = cube();
        assert_eq!(Mesh::new(c.faces.clone(), c.verts.clone()), Ok(c.clone()));
        assert_eq!(c.num_faces(), 12);

        // Faces wound counter-clockwise from outside have inward normals
        for t in c.tris() {
            let center = (t.0[0] + t.0[1] + t.0[2]) / 3.0;
            assert!(t.normal().dot(&center) < 0.0, "{t:?}");
            assert_approx_eq!(t.normal().len(), 1.0);
        }
    }

    #[test]
    fn error_display() {
        let e = Error::OutOfBounds { face: 2, index: 7, len: 5 };
        assert_eq!(
            format!("{e}"),
            "vertex index 7 out of bounds at face 2 (vertex count 5)"
        );
    }
}
