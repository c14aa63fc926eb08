//! Matrix decomposition (Householder QR).

mod qr;

pub use qr::{householder, QrDecomposition};
