//! Per-thread holder for the role of the current caller.
//!
//! Request-handling code can bind the authenticated role once and consult it
//! right before a permission check instead of threading it through every call
//! site. The engine itself never reads this state; pass the role to
//! [`has_access`](crate::MemoryPermissionManager::has_access) explicitly.

use crate::types::RoleId;
use std::cell::RefCell;

thread_local! {
    static CURRENT_ROLE: RefCell<Option<RoleId>> = const { RefCell::new(None) };
}

/// Binds `role` to the current thread, returning the displaced role.
pub fn set_role(role: RoleId) -> Option<RoleId> {
    CURRENT_ROLE.with(|cell| cell.borrow_mut().replace(role))
}

/// Returns the role bound to the current thread, if any.
pub fn role() -> Option<RoleId> {
    CURRENT_ROLE.with(|cell| cell.borrow().clone())
}

/// Clears the current thread's role binding, returning it.
pub fn clear() -> Option<RoleId> {
    CURRENT_ROLE.with(|cell| cell.borrow_mut().take())
}

/// Runs `f` with `role` bound, restoring the previous binding afterwards.
///
/// The previous binding is restored even if `f` panics.
pub fn with_role<T>(role: RoleId, f: impl FnOnce() -> T) -> T {
    struct Restore(Option<RoleId>);

    impl Drop for Restore {
        fn drop(&mut self) {
            CURRENT_ROLE.with(|cell| *cell.borrow_mut() = self.0.take());
        }
    }

    let _restore = Restore(set_role(role));
    f()
}
