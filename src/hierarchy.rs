//! Three-level constructor chain.
//!
//! `SuperChild` owns an `UnsuperChild`, which owns a `SomeBaseClass`. Each child
//! derefs to its parent, so `print_hello` is callable on every level. A
//! constructor announces itself first and then calls its parent's
//! constructor explicitly, exactly once.

use std::io::Write;
use std::ops::Deref;

use crate::console::Console;
use crate::error::Result;
use crate::messages::Announcement;

/// Construction entry point shared by every type in the chain.
pub trait Construct: Sized {
    const NAME: &'static str;

    fn construct<W: Write>(console: &mut Console<W>) -> Result<Self>;

    /// Type names from `Self` up to the root.
    fn ancestry() -> Vec<&'static str>;
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct SomeBaseClass {
    _constructed: (),
}

impl SomeBaseClass {
    pub fn print_hello<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.announce(Announcement::Hello)
    }
}

impl Construct for SomeBaseClass {
    const NAME: &'static str = "SomeBaseClass";

    fn construct<W: Write>(console: &mut Console<W>) -> Result<Self> {
        console.announce(Announcement::Base)?;
        Ok(SomeBaseClass { _constructed: () })
    }

    fn ancestry() -> Vec<&'static str> {
        vec![Self::NAME]
    }
}

// =============================================================================
// Middle
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct UnsuperChild {
    base: SomeBaseClass,
}

impl Construct for UnsuperChild {
    const NAME: &'static str = "UnsuperChild";

    fn construct<W: Write>(console: &mut Console<W>) -> Result<Self> {
        console.announce(Announcement::Middle)?;
        let base = SomeBaseClass::construct(console)?;
        Ok(UnsuperChild { base })
    }

    fn ancestry() -> Vec<&'static str> {
        let mut names = vec![Self::NAME];
        names.extend(SomeBaseClass::ancestry());
        names
    }
}

impl Deref for UnsuperChild {
    type Target = SomeBaseClass;

    fn deref(&self) -> &SomeBaseClass {
        &self.base
    }
}

// =============================================================================
// Leaf
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct SuperChild {
    middle: UnsuperChild,
}

impl Construct for SuperChild {
    const NAME: &'static str = "SuperChild";

    fn construct<W: Write>(console: &mut Console<W>) -> Result<Self> {
        console.announce(Announcement::Derived)?;
        let middle = UnsuperChild::construct(console)?;
        Ok(SuperChild { middle })
    }

    fn ancestry() -> Vec<&'static str> {
        let mut names = vec![Self::NAME];
        names.extend(UnsuperChild::ancestry());
        names
    }
}

impl Deref for SuperChild {
    type Target = UnsuperChild;

    fn deref(&self) -> &UnsuperChild {
        &self.middle
    }
}
