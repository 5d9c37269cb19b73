/// Implements the arithmetic every scalar quantity supports: addition and
/// subtraction between like quantities, scaling by a bare `f64`, and the
/// dimensionless ratio of two like quantities.
macro_rules! scalar_quantity_ops {
    ($ty:ident) => {
        impl std::ops::Add for $ty {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                $ty(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = $ty;

            fn sub(self, rhs: $ty) -> $ty {
                $ty(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = $ty;

            fn mul(self, rhs: f64) -> $ty {
                $ty(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                $ty(self * rhs.0)
            }
        }

        impl std::ops::Div<f64> for $ty {
            type Output = $ty;

            fn div(self, rhs: f64) -> $ty {
                $ty(self.0 / rhs)
            }
        }

        impl std::ops::Div for $ty {
            type Output = f64;

            fn div(self, rhs: $ty) -> f64 {
                self.0 / rhs.0
            }
        }

        impl $ty {
            /// Returns the smaller of two values.
            pub fn min(self, other: Self) -> Self {
                if self.0 < other.0 {
                    self
                } else {
                    other
                }
            }

            /// Returns the larger of two values.
            pub fn max(self, other: Self) -> Self {
                if self.0 > other.0 {
                    self
                } else {
                    other
                }
            }
        }
    };
}

pub(crate) use scalar_quantity_ops;
