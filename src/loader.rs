use std::path::Path;

use glam::Vec3;
use log::{info, warn};

use crate::{error::Result, material::LIGHT_GRAY, triangle::Triangle};

/// Loads a Wavefront OBJ as a flat triangle list.
///
/// Positions are mirrored in y to match the renderer's y-down world, which
/// keeps counter-clockwise OBJ faces facing outward. Each face takes the
/// diffuse colour of its MTL material, or light gray without one.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    let load_opts = tobj::LoadOptions {
        triangulate: true,
        ignore_lines: true,
        ignore_points: true,
        single_index: false,
    };
    let (models, materials) = tobj::load_obj(path, &load_opts)?;
    let materials = match materials {
        Ok(materials) => materials,
        Err(err) => {
            warn!("no materials for {}: {}", path.display(), err);
            Vec::new()
        }
    };

    let mut triangles: Vec<Triangle> = Vec::new();
    for m in &models {
        let color = m
            .mesh
            .material_id
            .and_then(|id| materials.get(id))
            .map(|mat| Vec3::from_array(mat.diffuse))
            .unwrap_or(LIGHT_GRAY);

        let pos = |i: u32| {
            let o = (i * 3) as usize;
            let p = &m.mesh.positions;
            Vec3::new(p[o], -p[o + 1], p[o + 2])
        };

        for face in m.mesh.indices.chunks_exact(3) {
            triangles.push(Triangle::new(pos(face[0]), pos(face[1]), pos(face[2]), color));
        }
        info!("  model \"{}\": {} faces", m.name, m.mesh.indices.len() / 3);
    }

    info!("loaded {} triangles from {}", triangles.len(), path.display());
    Ok(triangles)
}
