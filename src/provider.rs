/// Value provider: the base capability other libraries build on.
///
/// A provider yields the current integer value on demand. Implementations
/// must be total: `value()` always returns and never panics.

pub trait ValueProvider {
    /// Current integer value.
    fn value(&mut self) -> i32;
}

/// Provider that always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constant(pub i32);

impl ValueProvider for Constant {
    fn value(&mut self) -> i32 {
        self.0
    }
}

/// Provider backed by a closure. Created with [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Wrap a closure as a provider; each `value()` call invokes it.
pub fn from_fn<F: FnMut() -> i32>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> i32> ValueProvider for FromFn<F> {
    fn value(&mut self) -> i32 {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Box<T> {
    fn value(&mut self) -> i32 {
        (**self).value()
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for &mut T {
    fn value(&mut self) -> i32 {
        (**self).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read<P: ValueProvider>(mut p: P) -> i32 {
        p.value()
    }

    #[test]
    fn test_constant_is_stable() {
        let mut c = Constant(42);
        assert_eq!(c.value(), 42);
        assert_eq!(c.value(), 42);
        assert_eq!(Constant::default().value(), 0);
    }

    #[test]
    fn test_closure_provider() {
        let mut n = 0;
        let mut counter = from_fn(|| {
            n += 1;
            n
        });
        assert_eq!(counter.value(), 1);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_boxed_trait_object() {
        let mut providers: Vec<Box<dyn ValueProvider>> = vec![
            Box::new(Constant(i32::MIN)),
            Box::new(Constant(i32::MAX)),
            Box::new(from_fn(|| -7)),
        ];
        let values: Vec<i32> = providers.iter_mut().map(|p| p.value()).collect();
        assert_eq!(values, vec![i32::MIN, i32::MAX, -7]);
    }

    #[test]
    fn test_forwarding_impls() {
        let mut c = Constant(5);
        assert_eq!(read(&mut c), 5);
        let boxed: Box<dyn ValueProvider> = Box::new(Constant(9));
        assert_eq!(read(boxed), 9);
    }
}
