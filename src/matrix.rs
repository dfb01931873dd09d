use std::collections::HashMap;

use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use crate::error::QrResult;

// Error correction level
//------------------------------------------------------------------------------

/// Standard QR error correction levels, trading data capacity for resilience
/// to damage or occlusion.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum EcLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

// Module matrix
//------------------------------------------------------------------------------

/// A square grid of dark/light modules, as produced by the encoder.
/// Immutable once built; regenerated only when (text, level) changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Side length of the grid. Standard symbols are 21..=177 modules wide.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.width, "row out of bounds");
        debug_assert!(c < self.width, "column out of bounds");
        self.modules[r * self.width + c]
    }

    /// True iff (r, c) falls in one of the three fixed 7x7 finder pattern
    /// corners. A geometry test only; the module's color is irrelevant.
    pub fn in_finder_zone(&self, r: usize, c: usize) -> bool {
        crate::cell::in_finder_zone(r, c, self.width)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

/// Encodes `text` into a module matrix at the given error correction level.
///
/// Pure pass-through to the external encoder: symbol version selection, bit
/// packing and Reed-Solomon coding all happen there. Overcapacity input
/// surfaces as [`Error::Encoding`](crate::Error::Encoding); no level upgrade
/// is attempted.
pub fn encode(text: &str, level: EcLevel) -> QrResult<ModuleMatrix> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), level.into())?;
    let width = code.width();
    let modules = code
        .to_colors()
        .iter()
        .map(|&color| color == qrcode::Color::Dark)
        .collect();
    tracing::debug!(len = text.len(), ?level, width, "encoded module matrix");
    Ok(ModuleMatrix { width, modules })
}

// Matrix cache
//------------------------------------------------------------------------------

/// Cache of encoded matrices keyed by (text, level).
///
/// Re-encoding happens only when the key changes; style, gradient and logo
/// edits on a symbol must reuse the cached grid.
#[derive(Debug, Default)]
pub struct MatrixCache {
    matrices: HashMap<(String, EcLevel), ModuleMatrix>,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self { matrices: HashMap::new() }
    }

    /// Get or encode the matrix for the given key. On encoding failure the
    /// error propagates and nothing is cached, so a later call retries.
    pub fn get_or_encode(&mut self, text: &str, level: EcLevel) -> QrResult<&ModuleMatrix> {
        if !self.matrices.contains_key(&(text.to_string(), level)) {
            let matrix = encode(text, level)?;
            self.matrices.insert((text.to_string(), level), matrix);
        }
        Ok(&self.matrices[&(text.to_string(), level)])
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}
