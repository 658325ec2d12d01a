use std::io::Write;

use num_traits::Float;

use crate::eigen::Eigenvalue;
use crate::io::format::format_general;

/// Write one line per real eigenvalue and two lines per conjugate pair
/// (`<re> +<im>i` then `<re> -<im>i`).
pub fn write_eigenvalues<W: Write, T: Float>(out: &mut W, eigenvalues: &[Eigenvalue<T>]) -> std::io::Result<()> {
    for value in eigenvalues {
        match *value {
            Eigenvalue::Real(v) => {
                writeln!(out, "{}", format_general(to_f64(v)))?;
            }
            Eigenvalue::Complex { re, im } => {
                let re = format_general(to_f64(re));
                let im = format_general(to_f64(im));
                writeln!(out, "{} +{}i", re, im)?;
                writeln!(out, "{} -{}i", re, im)?;
            }
        }
    }
    Ok(())
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
