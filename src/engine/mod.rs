//! Structure-to-artifact synthesis
//!
//! Pure, synchronous transforms: page classification, component synthesis,
//! file set assembly, content analysis and command interpretation. Nothing
//! here touches the network; only [`FileSet::write_to`] touches disk.

pub mod analyze;
pub mod assemble;
pub mod classify;
pub mod interpret;
pub mod synth;

pub use analyze::{Analysis, PartialContent, analyze};
pub use assemble::{FileSet, assemble};
pub use classify::{BusinessPage, Strategy, classify};
pub use interpret::{Reply, interpret};
pub use synth::{Component, synthesize};
