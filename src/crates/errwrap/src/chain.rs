//! Walking a cause chain one `source()` step at a time.
//!
//! Every function here works on any `std::error::Error`, not just the types in
//! this crate, because [`WrappedError`](crate::WrappedError) exposes its cause
//! through `source()` like everything else in the ecosystem.

use std::error::Error;

/// Iterator over an error and each of its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` followed by every error in its cause chain.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The error `err` directly wraps, if any.
pub fn cause<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    err.source()
}

/// Number of links in the chain, counting `err` itself.
pub fn depth(err: &(dyn Error + 'static)) -> usize {
    chain(err).count()
}

/// The last error in the chain, the one with no cause.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// First link in the chain that is a `T`.
pub fn find_cause<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(err).find_map(|link| link.downcast_ref::<T>())
}

/// Whether any link in the chain satisfies `predicate`.
pub fn any_cause<P>(err: &(dyn Error + 'static), predicate: P) -> bool
where
    P: FnMut(&(dyn Error + 'static)) -> bool,
{
    chain(err).any(predicate)
}
