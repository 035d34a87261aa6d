//! spmat - Sparse Integer Matrix I/O and Driver Support
//!
//! This library wraps the `spmat-core` data structure with its two external
//! collaborators: a loader for the plain-text triple format and a printer
//! that renders stored entries for display.
//!
//! ## Architecture
//!
//! The workspace follows a clean core/collaborator separation:
//!
//! - **spmat-core**: Pure sparse storage and arithmetic (no I/O)
//! - **spmat**: Text-format loading, printing, and the demo driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{loader, printer, Error};
//!
//! fn example() -> Result<(), Error> {
//!     let a = loader::load_matrix("matrix1.txt")?;
//!     let b = loader::load_matrix("matrix2.txt")?;
//!
//!     let sum = a.add(&b)?;
//!     printer::print_matrix(&sum)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,5)
//! (1,2,-7)
//! ```

// Re-export the core data structure and its error taxonomy
pub use spmat_core::{MatrixError, SparseMatrix, Triple};

pub mod error;
pub mod loader;
pub mod printer;

pub use error::Error;
pub use loader::{load_matrix, parse_matrix, LoadError};
pub use printer::{matrix_to_string, print_matrix, write_matrix};
