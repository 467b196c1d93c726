//! Real-or-complex sample buffers
use crate::Error;
use num_complex::Complex64;

/// A buffer of samples, either purely real or complex
///
/// The variant is decided once, when the buffer is built; real data never
/// carries a placeholder imaginary part.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    /// Real-valued samples
    Real(Vec<f64>),
    /// Complex-valued samples
    Complex(Vec<Complex64>),
}

impl Samples {
    /// Builds a buffer from a real part and an optional imaginary part
    pub fn from_parts(re: Vec<f64>, im: Option<&[f64]>) -> Result<Self, Error> {
        match im {
            None => Ok(Samples::Real(re)),
            Some(im) if im.len() != re.len() => {
                Err(Error::MismatchedParts(re.len(), im.len()))
            }
            Some(im) => Ok(Samples::Complex(
                re.into_iter()
                    .zip(im)
                    .map(|(re, im)| Complex64::new(re, *im))
                    .collect(),
            )),
        }
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        match self {
            Samples::Real(v) => v.len(),
            Samples::Complex(v) => v.len(),
        }
    }

    /// Checks whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether this buffer holds complex values
    pub fn is_complex(&self) -> bool {
        matches!(self, Samples::Complex(..))
    }

    /// Returns the sample at the given index as a complex value
    ///
    /// Real samples are returned with a zero imaginary part.
    pub fn get(&self, i: usize) -> Option<Complex64> {
        match self {
            Samples::Real(v) => v.get(i).map(|re| Complex64::new(*re, 0.0)),
            Samples::Complex(v) => v.get(i).copied(),
        }
    }
}

impl From<Vec<f64>> for Samples {
    fn from(v: Vec<f64>) -> Self {
        Samples::Real(v)
    }
}

impl From<Vec<Complex64>> for Samples {
    fn from(v: Vec<Complex64>) -> Self {
        Samples::Complex(v)
    }
}
