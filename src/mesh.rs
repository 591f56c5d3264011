use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use crate::point3d::Point3D;
use crate::point4d::Point4D;

/// One triangle's corners. Position, texcoord and normal indices are
/// independent of each other; texcoords and normals may be absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub texcoords: Option<[usize; 3]>,
    pub normals: Option<[usize; 3]>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Point4D>,
    pub normals: Vec<Point3D>,
    pub texcoords: Vec<Point3D>,
    pub faces: Vec<Face>,
}

/// One `f` corner: 0-based vertex, texcoord and normal indices.
type Corner = (usize, Option<usize>, Option<usize>);

impl Mesh {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening mesh {}", path.display()))?;
        let mesh = Self::read(BufReader::new(file))
            .with_context(|| format!("parsing mesh {}", path.display()))?;
        log::info!(
            "loaded {}: {} vertices, {} normals, {} texcoords, {} triangles",
            path.display(),
            mesh.positions.len(),
            mesh.normals.len(),
            mesh.texcoords.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::read(text.as_bytes())
    }

    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut mesh = Mesh::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            mesh.parse_line(&line).with_context(|| format!("line {}: {line:?}", number + 1))?;
        }

        mesh.validate()?;
        Ok(mesh)
    }

    fn parse_line(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            return Ok(());
        }

        match tokens[0] {
            "v" => {
                let [x, y, z] = parse_floats::<3>(&tokens[1..])?;
                let w = tokens.get(4).map(|w| w.parse::<f32>()).transpose()?.unwrap_or(1.0);
                self.positions.push(Point4D { x, y, z, w });
            }
            "vt" => {
                let [u, v] = parse_floats::<2>(&tokens[1..])?;
                let w = tokens.get(3).map(|w| w.parse::<f32>()).transpose()?.unwrap_or(0.0);
                self.texcoords.push(Point3D { x: u, y: v, z: w });
            }
            "vn" => {
                let [x, y, z] = parse_floats::<3>(&tokens[1..])?;
                self.normals.push(Point3D { x, y, z });
            }
            "f" => {
                let corners = tokens[1..]
                    .iter()
                    .map(|part| parse_face_vertex(part))
                    .collect::<Result<Vec<Corner>>>()?;
                if corners.len() < 3 {
                    bail!("face needs at least 3 corners, got {}", corners.len());
                }
                // fan triangulate anything bigger than a triangle
                for i in 1..corners.len() - 1 {
                    self.faces.push(make_face([corners[0], corners[i], corners[i + 1]]));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Every face index has to land inside its array.
    fn validate(&self) -> Result<()> {
        for (i, face) in self.faces.iter().enumerate() {
            check_indices(i, "vertex", &face.vertices, self.positions.len())?;
            if let Some(texcoords) = &face.texcoords {
                check_indices(i, "texcoord", texcoords, self.texcoords.len())?;
            }
            if let Some(normals) = &face.normals {
                check_indices(i, "normal", normals, self.normals.len())?;
            }
        }
        Ok(())
    }

    pub fn face_positions(&self, face: &Face) -> [Point3D; 3] {
        face.vertices.map(|i| self.positions[i].xyz())
    }

    pub fn face_normals(&self, face: &Face) -> Option<[Point3D; 3]> {
        face.normals.map(|n| n.map(|i| self.normals[i]))
    }

    pub fn face_texcoords(&self, face: &Face) -> Option<[Point3D; 3]> {
        face.texcoords.map(|t| t.map(|i| self.texcoords[i]))
    }
}

fn parse_floats<const N: usize>(tokens: &[&str]) -> Result<[f32; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = tokens.get(i).ok_or_else(|| anyhow!("expected {N} numbers"))?;
        *slot = token.parse()?;
    }
    Ok(out)
}

fn parse_index(s: &str) -> Result<usize> {
    let index = s.parse::<usize>()?;
    index.checked_sub(1).ok_or_else(|| anyhow!("indices start at 1"))
}

fn parse_face_vertex(s: &str) -> Result<Corner> {
    let parts: Vec<&str> = s.split('/').collect();
    let v = parse_index(parts.first().ok_or_else(|| anyhow!("Missing vertex index"))?)?;
    let vt = match parts.get(1) {
        Some(&"") | None => None,
        Some(s) => Some(parse_index(s)?),
    };
    let vn = match parts.get(2) {
        Some(&"") | None => None,
        Some(s) => Some(parse_index(s)?),
    };
    Ok((v, vt, vn))
}

fn make_face(corners: [Corner; 3]) -> Face {
    let all = |pick: fn(&Corner) -> Option<usize>| -> Option<[usize; 3]> {
        Some([pick(&corners[0])?, pick(&corners[1])?, pick(&corners[2])?])
    };
    Face {
        vertices: corners.map(|c| c.0),
        texcoords: all(|c| c.1),
        normals: all(|c| c.2),
    }
}

fn check_indices(face: usize, kind: &str, indices: &[usize; 3], len: usize) -> Result<()> {
    if let Some(bad) = indices.iter().find(|&&i| i >= len) {
        bail!("face {face}: {kind} index {} out of range ({len} available)", bad + 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
# a unit quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0 2.0
vt 0 0
vt 1 0 0.5
vt 1 1
vt 0 1
vn 0 0 1

f 1/1/1 2/2/1 3/3/1 4/4/1
";

    #[test]
    fn test_parse_quad_fan() {
        let mesh = Mesh::parse(QUAD).unwrap();
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.positions[3].w, 2.0);
        assert_eq!(mesh.positions[0].w, 1.0);
        assert_eq!(mesh.texcoords[1].z, 0.5);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
        assert_eq!(mesh.faces[1].vertices, [0, 2, 3]);
        assert_eq!(mesh.faces[1].texcoords, Some([0, 2, 3]));
        assert_eq!(mesh.faces[1].normals, Some([0, 0, 0]));
    }

    #[test]
    fn test_face_forms() {
        let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1 2 3\nf 1//1 2//1 3//1\n").unwrap();
        assert_eq!(mesh.faces[0].texcoords, None);
        assert_eq!(mesh.faces[0].normals, None);
        assert_eq!(mesh.faces[1].texcoords, None);
        assert_eq!(mesh.faces[1].normals, Some([0, 0, 0]));
        assert_eq!(mesh.face_normals(&mesh.faces[1]), Some([Point3D::new(0.0, 0.0, 1.0); 3]));
        assert_eq!(mesh.face_positions(&mesh.faces[0])[1], Point3D::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_index_is_error() {
        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap_err();
        assert!(format!("{err:#}").contains("vertex index 4"));
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        let err = Mesh::parse("v 0 0 0\nv 1 zero 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(Mesh::parse("f 0 1 2\n").is_err());
        assert!(Mesh::parse("v 0 0 0\nf 1 1\n").is_err());
    }

    #[test]
    fn test_unknown_records_ignored() {
        let mesh = Mesh::parse("o head\ng part\ns off\nusemtl skin\nv 1 2 3\n").unwrap();
        assert_eq!(mesh.positions, vec![Point4D::new(1.0, 2.0, 3.0, 1.0)]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Mesh::load("no/such/mesh.obj").unwrap_err();
        assert!(format!("{err:#}").contains("no/such/mesh.obj"));
    }
}
