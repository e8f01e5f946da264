/// A decorated function value.
///
/// `A` is the argument; use a tuple for several arguments and `()` for none.
pub trait Wrapped<A> {
    type Output;

    fn call(&mut self, args: A) -> Self::Output;
}
