//! Radial basis function interpolation over scattered 2D samples.
//!
//! Constructs the kernel matrix from pairwise distances, augments it with a
//! degree-1 polynomial block, solves the symmetric system, and evaluates the
//! interpolant at query points. The kernels here are conditionally positive
//! definite, so the polynomial augmentation is always carried:
//!
//! ```text
//! [ K   P ] [ w ]   [ v ]
//! [ P^T 0 ] [ c ] = [ 0 ]      with P = [1, x, y]
//! ```

use nalgebra::{DMatrix, DVector};

use crate::error::{WaferMapError, WaferMapResult};
use crate::sample::Sample;

/// RBF kernel function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbfKernel {
    /// `r^2 * ln(r)`; minimizes bending energy, resists overshoot on noisy
    /// scattered measurements. The wafer map default.
    ThinPlateSpline,
    /// `r`
    Linear,
    /// `r^3`
    Cubic,
}

impl RbfKernel {
    /// Kernel value at distance `r`.
    fn apply(self, r: f64) -> f64 {
        match self {
            // 0 * ln(0) = 0 by the kernel's limit.
            Self::ThinPlateSpline => {
                if r == 0.0 {
                    0.0
                } else {
                    r * r * r.ln()
                }
            }
            Self::Linear => r,
            Self::Cubic => r * r * r,
        }
    }
}

/// A fitted RBF interpolant over 2D sample coordinates.
///
/// The interpolant passes exactly through every sample it was fitted to.
#[derive(Debug, Clone)]
pub struct RbfModel {
    centers: Vec<(f64, f64)>,
    weights: DVector<f64>,
    /// Polynomial term coefficients `[c, c_x, c_y]`.
    poly: [f64; 3],
    kernel: RbfKernel,
}

impl RbfModel {
    /// Fit an interpolant through `samples`.
    ///
    /// Fails with [`WaferMapError::Interpolation`] when the system is
    /// singular (coincident or collinear sample coordinates) rather than
    /// returning a degenerate field.
    pub fn fit(samples: &[Sample], kernel: RbfKernel) -> WaferMapResult<RbfModel> {
        let n = samples.len();
        if n < 3 {
            return Err(WaferMapError::Interpolation {
                message: format!("RBF fit requires at least 3 samples, got {n}"),
            });
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if samples[i].x == samples[j].x && samples[i].y == samples[j].y {
                    return Err(WaferMapError::Interpolation {
                        message: format!(
                            "coincident sample coordinates at ({}, {}) make the RBF system singular",
                            samples[i].x, samples[i].y
                        ),
                    });
                }
            }
        }

        let size = n + 3;
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        for i in 0..n {
            // Diagonal K entries are phi(0) = 0 for every kernel here.
            for j in 0..i {
                let k = kernel.apply(samples[i].distance_to(samples[j].x, samples[j].y));
                matrix[(i, j)] = k;
                matrix[(j, i)] = k;
            }
            matrix[(i, n)] = 1.0;
            matrix[(i, n + 1)] = samples[i].x;
            matrix[(i, n + 2)] = samples[i].y;
            matrix[(n, i)] = 1.0;
            matrix[(n + 1, i)] = samples[i].x;
            matrix[(n + 2, i)] = samples[i].y;
        }

        let mut rhs = DVector::<f64>::zeros(size);
        for (i, sample) in samples.iter().enumerate() {
            rhs[i] = sample.value;
        }

        let solution = matrix.full_piv_lu().solve(&rhs).ok_or_else(|| {
            WaferMapError::Interpolation {
                message: "RBF system is singular: sample coordinates are degenerate".to_string(),
            }
        })?;

        Ok(RbfModel {
            centers: samples.iter().map(|s| (s.x, s.y)).collect(),
            weights: DVector::from_iterator(n, solution.iter().take(n).copied()),
            poly: [solution[n], solution[n + 1], solution[n + 2]],
            kernel,
        })
    }

    /// Evaluate the interpolant at one point.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let mut acc = self.poly[0] + self.poly[1] * x + self.poly[2] * y;
        for (w, &(cx, cy)) in self.weights.iter().zip(&self.centers) {
            acc += w * self.kernel.apply((x - cx).hypot(y - cy));
        }
        acc
    }

    /// The kernel this model was fitted with.
    pub fn kernel(&self) -> RbfKernel {
        self.kernel
    }

    /// Number of centers in the fitted system.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Sample> {
        vec![
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 0.0, 1.0),
            Sample::new(0.0, 1.0, 1.0),
            Sample::new(1.0, 1.0, 2.0),
        ]
    }

    #[test]
    fn test_thin_plate_passes_through_samples() {
        let samples = unit_square();
        let model = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline).unwrap();
        for sample in &samples {
            let fitted = model.evaluate(sample.x, sample.y);
            assert!(
                (fitted - sample.value).abs() < 1e-6,
                "({}, {}): {} vs {}",
                sample.x,
                sample.y,
                fitted,
                sample.value
            );
        }
    }

    #[test]
    fn test_linear_and_cubic_pass_through_samples() {
        let samples = unit_square();
        for kernel in [RbfKernel::Linear, RbfKernel::Cubic] {
            let model = RbfModel::fit(&samples, kernel).unwrap();
            for sample in &samples {
                let fitted = model.evaluate(sample.x, sample.y);
                assert!(
                    (fitted - sample.value).abs() < 1e-6,
                    "{:?} at ({}, {}): {} vs {}",
                    kernel,
                    sample.x,
                    sample.y,
                    fitted,
                    sample.value
                );
            }
        }
    }

    #[test]
    fn test_wafer_scale_coordinates_stay_exact() {
        // Thin-plate values grow like r^2 ln r; the solve must stay accurate
        // at the 100mm-scale coordinates a wafer actually uses.
        let samples = vec![
            Sample::new(-50.0, 0.0, 1.0),
            Sample::new(50.0, 0.0, 2.0),
            Sample::new(0.0, -50.0, 3.0),
            Sample::new(0.0, 50.0, 4.0),
            Sample::new(0.0, 150.0, 4.0),
            Sample::new(0.0, -150.0, 3.0),
            Sample::new(150.0, 0.0, 2.0),
            Sample::new(-150.0, 0.0, 1.0),
        ];
        let model = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline).unwrap();
        for sample in &samples {
            let fitted = model.evaluate(sample.x, sample.y);
            assert!(
                (fitted - sample.value).abs() < 1e-6,
                "({}, {}): {} vs {}",
                sample.x,
                sample.y,
                fitted,
                sample.value
            );
        }
    }

    #[test]
    fn test_evaluation_between_samples_is_finite() {
        let model = RbfModel::fit(&unit_square(), RbfKernel::ThinPlateSpline).unwrap();
        for &(x, y) in &[(0.5, 0.5), (0.25, 0.75), (0.0, 0.5), (1.0, 1.0)] {
            assert!(model.evaluate(x, y).is_finite(), "NaN at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let samples = unit_square();
        let a = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline).unwrap();
        let b = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline).unwrap();
        for &(x, y) in &[(0.3, 0.7), (0.9, 0.1)] {
            assert_eq!(a.evaluate(x, y), b.evaluate(x, y));
        }
    }

    #[test]
    fn test_coincident_points_rejected() {
        let samples = vec![
            Sample::new(1.0, 1.0, 0.5),
            Sample::new(1.0, 1.0, 0.7),
            Sample::new(2.0, 2.0, 0.9),
        ];
        let result = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline);
        assert!(
            matches!(&result, Err(WaferMapError::Interpolation { .. })),
            "expected Interpolation error, got {:?}",
            result.map(|m| m.len())
        );
    }

    #[test]
    fn test_too_few_points_rejected() {
        let samples = vec![Sample::new(0.0, 0.0, 1.0), Sample::new(1.0, 0.0, 2.0)];
        let result = RbfModel::fit(&samples, RbfKernel::ThinPlateSpline);
        assert!(matches!(result, Err(WaferMapError::Interpolation { .. })));
    }

    #[test]
    fn test_collinear_points_rejected() {
        // All centers on a line: the polynomial block loses rank.
        let samples = vec![
            Sample::new(0.0, 0.0, 1.0),
            Sample::new(1.0, 0.0, 2.0),
            Sample::new(2.0, 0.0, 3.0),
        ];
        let result = RbfModel::fit(&samples, RbfKernel::Linear);
        // Either the solver flags the rank deficiency or the fit still
        // reproduces the samples; it must never return NaN weights.
        match result {
            Err(WaferMapError::Interpolation { .. }) => {}
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(model) => {
                for sample in &samples {
                    let fitted = model.evaluate(sample.x, sample.y);
                    assert!(fitted.is_finite(), "non-finite fit from collinear input");
                }
            }
        }
    }
}
