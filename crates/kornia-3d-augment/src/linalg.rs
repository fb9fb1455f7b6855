/// The 3x3 identity matrix.
pub const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Right-multiply a set of points by a 3x3 matrix.
///
/// Each point is treated as a row vector, so `dst = src @ m`.
///
/// # Arguments
///
/// * `src_points` - A set of points with shape (N, 3).
/// * `m` - A row-major 3x3 matrix.
/// * `dst_points` - A pre-allocated vector to store the transformed points.
///
/// PRECONDITION: dst_points is a pre-allocated vector of the same size as source.
///
/// Example:
///
/// ```
/// use kornia_3d_augment::linalg::right_multiply;
///
/// let src_points = vec![[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
/// let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 2.0, 3.0]];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// right_multiply(&src_points, &m, &mut dst_points);
/// assert_eq!(dst_points, vec![[1.0, 2.0, 3.0], [2.0, 3.0, 3.0]]);
/// ```
pub fn right_multiply(src_points: &[[f64; 3]], m: &[[f64; 3]; 3], dst_points: &mut [[f64; 3]]) {
    assert_eq!(src_points.len(), dst_points.len());

    if src_points.is_empty() {
        return;
    }

    let m_mat = {
        // SAFETY: [[f64; 3]; 3] is 9 contiguous f64 values
        let m_slice = unsafe { std::slice::from_raw_parts(m.as_ptr() as *const f64, 9) };
        faer::mat::from_row_major_slice(m_slice, 3, 3)
    };

    // create view of the source points
    let points_in_src = {
        // SAFETY: [[f64; 3]] is laid out as 3 * N contiguous f64 values
        let src_points_slice = unsafe {
            std::slice::from_raw_parts(src_points.as_ptr() as *const f64, src_points.len() * 3)
        };
        faer::mat::from_row_major_slice(src_points_slice, src_points.len(), 3)
    };

    // the transposed destination, 3xN, where each column is an output point
    let mut points_in_dst = {
        // SAFETY: [[f64; 3]] is laid out as 3 * N contiguous f64 values
        let dst_points_slice = unsafe {
            std::slice::from_raw_parts_mut(
                dst_points.as_mut_ptr() as *mut f64,
                dst_points.len() * 3,
            )
        };
        faer::mat::from_column_major_slice_mut(dst_points_slice, 3, dst_points.len())
    };

    // (src @ m)^T = m^T @ src^T
    faer::linalg::matmul::matmul(
        &mut points_in_dst,
        m_mat.transpose(),
        points_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );
}

/// Multiply two 3x3 matrices, `a @ b`.
pub fn matmul33(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}
