use crate::error::{GeometryError, Result};
use crate::math::{Aabb, Point3, PointN, Vector3, VectorN};

/// Finds a point in `aabb` that lies on the plane through `origin` spanned by
/// the orthonormal `axes`.
///
/// Returns `Ok(None)` if the plane misses the box. With `proper`, a plane
/// that only touches the boundary of the box misses it.
///
/// # Errors
///
/// Returns `GeometryError::UnsupportedDimension` unless `D == 3`.
pub(crate) fn plane_box_witness<const D: usize>(
    origin: &PointN<D>,
    axes: &[VectorN<D>; 2],
    aabb: &Aabb<D>,
    proper: bool,
) -> Result<Option<PointN<D>>> {
    match D {
        3 => {
            let hit = plane_box_witness_3d(
                &Point3::from(to_3d(&origin.coords)),
                &[to_3d(&axes[0]), to_3d(&axes[1])],
                &Point3::from(to_3d(&aabb.min.coords)),
                &Point3::from(to_3d(&aabb.max.coords)),
                proper,
            );
            Ok(hit.map(|p| PointN::from(VectorN::<D>::from_iterator(p.coords.iter().copied()))))
        }
        dim => Err(GeometryError::UnsupportedDimension { dim }.into()),
    }
}

fn to_3d<const D: usize>(v: &VectorN<D>) -> Vector3 {
    Vector3::from_iterator(v.iter().copied())
}

/// Signed distances of the two box corners furthest behind and ahead of the
/// plane decide the hit; the witness is where the diagonal between them
/// crosses the plane.
fn plane_box_witness_3d(
    origin: &Point3,
    axes: &[Vector3; 2],
    min: &Point3,
    max: &Point3,
    proper: bool,
) -> Option<Point3> {
    let normal = axes[0].cross(&axes[1]);

    let mut back = *min;
    let mut front = *max;
    for i in 0..3 {
        if normal[i] < 0.0 {
            back[i] = max[i];
            front[i] = min[i];
        }
    }

    let d_back = normal.dot(&(back - origin));
    let d_front = normal.dot(&(front - origin));

    let separated = if proper {
        d_back >= 0.0 || d_front <= 0.0
    } else {
        d_back > 0.0 || d_front < 0.0
    };
    if separated {
        return None;
    }

    let t = if d_front > d_back {
        -d_back / (d_front - d_back)
    } else {
        0.5
    };
    Some(back + (front - back) * t)
}
