//! UI symbols (markers, glyphs, etc.)
//!
//! ## Character Set Policy
//! - **Unicode adopted**: matches the braille canvas the chart already draws
//! - ASCII fallback (theme feature) to be considered in future
//!
//! ASCII alternatives (for reference):
//! - STEP: 'o' or '*'
//! - ACTIVE: '@'
//! - UNIT: '#'

/// Step markers in the narrative panel
pub mod markers {
    /// Selected step marker (●)
    pub const ACTIVE: char = '●';
    /// Normal step marker (○)
    pub const STEP: char = '○';
}

/// File breakdown glyphs
pub mod files {
    /// One line of code (▪)
    pub const UNIT: char = '▪';
}
