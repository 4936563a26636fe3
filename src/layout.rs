//! CBLAS-style selector enumerations.
//!
//! Every structured kernel is steered by a handful of small enums. They map
//! one-to-one onto the single-character flags of the reference Fortran BLAS
//! (`'N'`, `'T'`, `'C'`, `'U'`, `'L'`, ...), and decoding an unknown
//! character is reported as [`BlasError::InvalidArgument`].

use std::fmt;

use crate::BlasError;

// ============================================================================
// Transpose
// ============================================================================

/// BLAS transpose operation flag.
///
/// - 'N': No transpose
/// - 'T': Transpose
/// - 'C': Conjugate transpose (adjoint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transpose {
    /// No transpose operation
    #[default]
    NoTrans,
    /// Transpose operation
    Trans,
    /// Conjugate transpose (adjoint)
    ConjTrans,
}

impl Transpose {
    /// Convert to CBLAS character representation.
    pub fn to_char(self) -> char {
        match self {
            Transpose::NoTrans => 'N',
            Transpose::Trans => 'T',
            Transpose::ConjTrans => 'C',
        }
    }
}

impl TryFrom<char> for Transpose {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Transpose::NoTrans),
            'T' => Ok(Transpose::Trans),
            'C' => Ok(Transpose::ConjTrans),
            _ => Err(BlasError::invalid_argument("trans", c)),
        }
    }
}

// ============================================================================
// Uplo / Diag / Side
// ============================================================================

/// Which triangle of a structured matrix is physically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Uplo {
    #[default]
    Upper,
    Lower,
}

impl Uplo {
    pub fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(BlasError::invalid_argument("uplo", c)),
        }
    }
}

/// Whether the diagonal of a triangular matrix is implicitly one.
///
/// With [`Diag::Unit`] the stored diagonal is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Diag {
    #[default]
    NonUnit,
    Unit,
}

impl Diag {
    pub fn to_char(self) -> char {
        match self {
            Diag::NonUnit => 'N',
            Diag::Unit => 'U',
        }
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }
}

impl TryFrom<char> for Diag {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Diag::NonUnit),
            'U' => Ok(Diag::Unit),
            _ => Err(BlasError::invalid_argument("diag", c)),
        }
    }
}

/// Side from which the structured operand multiplies in a level-3 product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// `C := alpha*A*B + beta*C`
    #[default]
    Left,
    /// `C := alpha*B*A + beta*C`
    Right,
}

impl Side {
    pub fn to_char(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl TryFrom<char> for Side {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Side::Left),
            'R' => Ok(Side::Right),
            _ => Err(BlasError::invalid_argument("side", c)),
        }
    }
}

// ============================================================================
// MatrixKind
// ============================================================================

/// Structure of a matrix operand.
///
/// Triangular kinds carry the unit-diagonal flag; symmetric and Hermitian
/// kinds carry the triangle that is physically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    General,
    UpperTriangular(Diag),
    LowerTriangular(Diag),
    Symmetric(Uplo),
    Hermitian(Uplo),
}

impl MatrixKind {
    /// Stored triangle and diagonal convention, if this kind is triangular.
    pub fn triangular(self) -> Option<(Uplo, Diag)> {
        match self {
            MatrixKind::UpperTriangular(diag) => Some((Uplo::Upper, diag)),
            MatrixKind::LowerTriangular(diag) => Some((Uplo::Lower, diag)),
            _ => None,
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::General => write!(f, "general"),
            MatrixKind::UpperTriangular(Diag::Unit) => write!(f, "unit upper triangular"),
            MatrixKind::UpperTriangular(Diag::NonUnit) => write!(f, "upper triangular"),
            MatrixKind::LowerTriangular(Diag::Unit) => write!(f, "unit lower triangular"),
            MatrixKind::LowerTriangular(Diag::NonUnit) => write!(f, "lower triangular"),
            MatrixKind::Symmetric(uplo) => write!(f, "symmetric ({})", uplo.to_char()),
            MatrixKind::Hermitian(uplo) => write!(f, "hermitian ({})", uplo.to_char()),
        }
    }
}
