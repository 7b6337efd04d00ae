//! Constructor chaining through a three-level hierarchy.
//!
//! Rust has no inheritance, so each child owns its parent and derefs to it.
//! Every constructor prints its own line before delegating to its parent:
//!
//! ```
//! use ctor_chain::{Console, Construct, SuperChild};
//!
//! let mut console = Console::buffered();
//! let leaf = SuperChild::construct(&mut console).unwrap();
//! assert_eq!(console.lines().len(), 3);
//! leaf.print_hello(&mut console).unwrap();
//! ```

pub mod console;
pub mod error;
pub mod hierarchy;
pub mod messages;

pub use console::Console;
pub use error::{ChainError, Result};
pub use hierarchy::{Construct, SomeBaseClass, SuperChild, UnsuperChild};
pub use messages::{Announcement, Messages};
