//! Parameters that are either a literal or a function of the current value

/// A literal value, or a function receiving the current value
#[derive(Clone, Copy)]
pub enum Callable<'a, T> {
    Literal(T),
    Function(&'a dyn Fn(T) -> T),
}

impl<T: std::fmt::Debug> std::fmt::Debug for Callable<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<T> From<T> for Callable<'_, T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T: Copy> Callable<'_, T> {
    /// Literal passes through, a function receives `current`
    pub fn resolve(&self, current: T) -> T {
        match self {
            Self::Literal(value) => *value,
            Self::Function(func) => func(current),
        }
    }
}

/// Free-function form of [`Callable::resolve`]
pub fn resolve_callable<T: Copy>(callable: &Callable<'_, T>, current: T) -> T {
    callable.resolve(current)
}
