//! Triangle meshes
//!
//! A [MeshSource] supplies vertices in normalized device coordinates,
//! x and y in [-1,1], and triangular faces as vertex indices.
//!
//! [MeshSource]: trait.MeshSource.html

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::MeshError;
use crate::geometry::Vec3f;

/// Source of vertices and triangular faces
pub trait MeshSource {
    fn vertex_count(&self) -> usize;
    fn face_count(&self) -> usize;
    /// Vertex `i`, `i < vertex_count()`
    fn vertex(&self, i: usize) -> Vec3f;
    /// Vertex indices of face `i`, `i < face_count()`
    fn face(&self, i: usize) -> [usize; 3];
}

/// In memory triangle mesh
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Mesh {
    verts: Vec<Vec3f>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Create a new mesh
    ///
    /// Returns `None` if a face refers to a vertex that does not exist
    pub fn new(verts: Vec<Vec3f>, faces: Vec<[usize; 3]>) -> Option<Self> {
        if faces.iter().flatten().any(|&i| i >= verts.len()) {
            return None;
        }
        Some(Mesh { verts, faces })
    }
    /// Load a Wavefront OBJ file
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Self, MeshError> {
        let file = File::open(filename)?;
        Mesh::from_obj(BufReader::new(file))
    }
    /// Read a mesh in Wavefront OBJ format
    ///
    /// Only vertex positions (`v x y z`) and faces (`f ...`) are used. Face
    /// entries may be `i`, `i/t`, `i//n` or `i/t/n`; indices start at 1,
    /// negative indices count back from the last vertex read. Polygons with
    /// more than three vertices are split into a fan of triangles.
    ///
    ///     use tgaraster::{Mesh, MeshSource};
    ///
    ///     let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1/1 2/2/2 3/3/3 4/4/4\n";
    ///     let mesh = Mesh::from_obj(obj.as_bytes()).unwrap();
    ///     assert_eq!(mesh.vertex_count(), 4);
    ///     assert_eq!(mesh.face_count(), 2);
    ///     assert_eq!(mesh.face(1), [0, 2, 3]);
    ///
    pub fn from_obj<R: BufRead>(r: R) -> Result<Self, MeshError> {
        let mut mesh = Mesh::default();
        let mut skipped = 0;
        for (n, line) in r.lines().enumerate() {
            let line = line?;
            let n = n + 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let mut v = [0.0f64; 3];
                    for value in v.iter_mut() {
                        let t = tokens.next().ok_or_else(|| MeshError::Parse {
                            line: n, msg: "vertex needs three coordinates".into()
                        })?;
                        *value = t.parse().map_err(|_| MeshError::Parse {
                            line: n, msg: format!("bad coordinate {:?}", t)
                        })?;
                    }
                    mesh.verts.push(Vec3f::new(v[0], v[1], v[2]));
                },
                Some("f") => {
                    let idx = tokens.map(|t| mesh.face_index(t, n))
                        .collect::<Result<Vec<_>, _>>()?;
                    if idx.len() < 3 {
                        return Err(MeshError::Parse {
                            line: n, msg: "face needs at least three vertices".into()
                        });
                    }
                    for k in 1 .. idx.len() - 1 {
                        mesh.faces.push([idx[0], idx[k], idx[k+1]]);
                    }
                },
                Some(t) if t.starts_with('#') => {},
                Some(_) => skipped += 1,
                None => {},
            }
        }
        debug!(vertices = mesh.verts.len(), faces = mesh.faces.len(), skipped, "read obj mesh");
        Ok(mesh)
    }
    /// Vertex index of a face token, relative to the vertices read so far
    fn face_index(&self, token: &str, line: usize) -> Result<usize, MeshError> {
        let pos = token.split('/').next().unwrap_or(token);
        let i : i64 = pos.parse().map_err(|_| MeshError::Parse {
            line, msg: format!("bad face index {:?}", token)
        })?;
        let n = self.verts.len() as i64;
        let k = if i > 0 { i - 1 } else { n + i };
        if i == 0 || k < 0 || k >= n {
            trace!(line, index = i, vertices = n, "face index out of range");
            return Err(MeshError::IndexOutOfRange { line, index: i });
        }
        Ok(k as usize)
    }
}

impl MeshSource for Mesh {
    fn vertex_count(&self) -> usize {
        self.verts.len()
    }
    fn face_count(&self) -> usize {
        self.faces.len()
    }
    fn vertex(&self, i: usize) -> Vec3f {
        self.verts[i]
    }
    fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_obj() {
        let obj = "\
# a comment
o thing
v 0.5 -0.5 0.0
v 1.0 2.0 3.0
vt 0.1 0.2
vn 0 0 1
v -1 -1 -1
f 1/1/1 2/1/1 3/1/1
f 3 -2 -3
f 1//1 2//1 3//1
";
        let m = Mesh::from_obj(obj.as_bytes()).unwrap();
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.face_count(), 3);
        assert_eq!(m.vertex(0), Vec3f::new(0.5, -0.5, 0.0));
        assert_eq!(m.vertex(2), Vec3f::new(-1.0, -1.0, -1.0));
        assert_eq!(m.face(0), [0,1,2]);
        assert_eq!(m.face(1), [2,1,0]);
        assert_eq!(m.face(2), [0,1,2]);
    }

    #[test]
    fn bad_obj() {
        let e = Mesh::from_obj("v 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(e, MeshError::Parse { line: 1, .. }));
        let e = Mesh::from_obj("v 1 2 x\n".as_bytes()).unwrap_err();
        assert!(matches!(e, MeshError::Parse { line: 1, .. }));
        let e = Mesh::from_obj("v 1 2 3\nf 1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(e, MeshError::IndexOutOfRange { line: 2, index: 2 }));
        let e = Mesh::from_obj("v 1 2 3\nf 1 0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(e, MeshError::IndexOutOfRange { line: 2, index: 0 }));
        let e = Mesh::from_obj("v 1 2 3\nf 1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(e, MeshError::Parse { line: 2, .. }));
    }

    #[test]
    fn new_checks_indices() {
        let v = vec![Vec3f::default(); 3];
        assert!(Mesh::new(v.clone(), vec![[0,1,2]]).is_some());
        assert!(Mesh::new(v, vec![[0,1,3]]).is_none());
    }
}
