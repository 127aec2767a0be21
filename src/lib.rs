//! # ucdata
//!
//! Compact Unicode character database. Character properties, case mappings,
//! canonical decompositions, combining classes and numeric values are read
//! from five small binary table files and answered by binary search.
//!
//! ## Quick Start
//!
//! ```rust
//! use ucdata::prelude::*;
//! use ucdata::writer::write_cmbcl;
//!
//! let cmbcl = write_cmbcl(ByteOrder::Little, &[(0x300, 0x314, 230)]).unwrap();
//! let source = MemorySource::new().with("cmbcl.dat", cmbcl);
//!
//! let mut ucd = UcData::new();
//! assert!(ucd.load(&source, Tables::CMBCL).is_ok());
//! assert_eq!(ucd.cmbcl().unwrap().combining_class(0x301), 230);
//! assert!(ucd.num().is_err());
//! ```
//!
//! Table files are usually found through a [`SearchPath`](source::SearchPath),
//! which reads the `UCDATA_PATH` environment variable.
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`decoder`] | Byte-order marker and endian-aware field reader |
//! | [`search`] | Binary search over fixed-width records |
//! | [`category`] | 64-bit category set and derived unions |
//! | [`tables`] | The five table decoders and their queries |
//! | [`registry`] | Load, reload and unload of the tables |
//! | [`source`] | Locating table files on disk or in memory |
//! | [`writer`] | Encoder for the table file format |
//! | [`error`] | Error type |

pub mod category;
pub mod decoder;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod search;
pub mod source;
pub mod tables;
pub mod writer;

/// A Unicode scalar value. Signed to match the on-disk 32-bit fields;
/// negative values never match any table entry.
pub type Codepoint = i32;
