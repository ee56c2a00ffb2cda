//! Pointer/touch sample mapping from host screen space to engine UV space.

/// Screen-to-UV mapping with a cached surface rectangle.
pub mod pointer;
