/// Projective mapping between two quadrilaterals.
use crate::models::Point;

/// Perspective transformation matrix (3x3)
///
/// Maps `(x, y)` to `((a11*x + a12*y + a13) / d, (a21*x + a22*y + a23) / d)`
/// with `d = a31*x + a32*y + a33`.
pub struct PerspectiveTransform {
    a11: f32,
    a12: f32,
    a13: f32,
    a21: f32,
    a22: f32,
    a23: f32,
    a31: f32,
    a32: f32,
    a33: f32,
}

impl PerspectiveTransform {
    /// Create transform from 4 source points to 4 destination points.
    ///
    /// Returns `None` when the correspondence is degenerate (e.g. three
    /// collinear points) and no unique transform exists.
    pub fn from_points(src: &[Point; 4], dst: &[Point; 4]) -> Option<Self> {
        // Direct linear transform: 8 unknowns from 4 point correspondences
        let mut a = [[0.0f32; 8]; 8];
        let mut b = [0.0f32; 8];

        for i in 0..4 {
            let (sx, sy) = (src[i].x, src[i].y);
            let (dx, dy) = (dst[i].x, dst[i].y);

            let row = i * 2;
            a[row][0] = sx;
            a[row][1] = sy;
            a[row][2] = 1.0;
            a[row][3] = 0.0;
            a[row][4] = 0.0;
            a[row][5] = 0.0;
            a[row][6] = -dx * sx;
            a[row][7] = -dx * sy;
            b[row] = dx;

            a[row + 1][0] = 0.0;
            a[row + 1][1] = 0.0;
            a[row + 1][2] = 0.0;
            a[row + 1][3] = sx;
            a[row + 1][4] = sy;
            a[row + 1][5] = 1.0;
            a[row + 1][6] = -dy * sx;
            a[row + 1][7] = -dy * sy;
            b[row + 1] = dy;
        }

        solve_linear_system(&a, &b).map(|solution| Self {
            a11: solution[0],
            a12: solution[1],
            a13: solution[2],
            a21: solution[3],
            a22: solution[4],
            a23: solution[5],
            a31: solution[6],
            a32: solution[7],
            a33: 1.0,
        })
    }

    /// Apply the transform to a point.
    pub fn apply(&self, p: &Point) -> Point {
        let x = p.x;
        let y = p.y;

        let denominator = self.a31 * x + self.a32 * y + self.a33;
        if denominator.abs() < 1e-10 {
            return Point::new(0.0, 0.0);
        }

        let x_new = (self.a11 * x + self.a12 * y + self.a13) / denominator;
        let y_new = (self.a21 * x + self.a22 * y + self.a23) / denominator;

        Point::new(x_new, y_new)
    }

    /// True when every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.a11, self.a12, self.a13, self.a21, self.a22, self.a23, self.a31, self.a32,
            self.a33,
        ]
        .iter()
        .all(|c| c.is_finite())
    }
}

/// Solve 8x8 linear system using Gaussian elimination with partial pivoting.
#[allow(clippy::needless_range_loop)]
fn solve_linear_system(a: &[[f32; 8]; 8], b: &[f32; 8]) -> Option<[f32; 8]> {
    let mut a = *a;
    let mut b = *b;
    let n = 8;

    // Forward elimination
    for i in 0..n {
        let mut max_val = a[i][i].abs();
        let mut max_row = i;

        for k in (i + 1)..n {
            if a[k][i].abs() > max_val {
                max_val = a[k][i].abs();
                max_row = k;
            }
        }

        // Singular matrix
        if max_val < 1e-10 {
            return None;
        }

        if max_row != i {
            a.swap(i, max_row);
            b.swap(i, max_row);
        }

        for k in (i + 1)..n {
            let factor = a[k][i] / a[i][i];
            b[k] -= factor * b[i];

            for j in i..n {
                a[k][j] -= factor * a[i][j];
            }
        }
    }

    // Back substitution
    let mut x = [0.0f32; 8];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[i][j] * x[j];
        }

        if a[i][i].abs() < 1e-10 {
            return None;
        }

        x[i] = sum / a[i][i];
    }

    Some(x)
}
