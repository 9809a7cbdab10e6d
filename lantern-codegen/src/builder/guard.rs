//! Scoped indentation.

use std::ops::{Deref, DerefMut};

/// Anything that carries an indentation depth.
pub trait Indentation {
    /// Mutable access to the current depth.
    fn indent_level_mut(&mut self) -> &mut usize;
}

/// Holds one extra level of indentation on `T` until dropped.
///
/// The guard dereferences to the target, so emission continues through it
/// while the deeper level is active.
pub struct IndentGuard<'a, T: Indentation + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: Indentation + ?Sized> IndentGuard<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        *target.indent_level_mut() += 1;
        Self { target }
    }
}

impl<T: Indentation + ?Sized> Deref for IndentGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: Indentation + ?Sized> DerefMut for IndentGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: Indentation + ?Sized> Drop for IndentGuard<'_, T> {
    fn drop(&mut self) {
        let level = self.target.indent_level_mut();
        *level = level.saturating_sub(1);
    }
}

/// Run `body` against `target` one level deeper, restoring the depth on
/// return and on unwind.
pub fn with_indent<T, R>(target: &mut T, body: impl FnOnce(&mut T) -> R) -> R
where
    T: Indentation + ?Sized,
{
    let mut guard = IndentGuard::new(target);
    body(&mut guard)
}
