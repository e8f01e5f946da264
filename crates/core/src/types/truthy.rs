//! Truthiness of values
//!
//! Predicates in this library may return any [`Truthy`] type, not only
//! `bool`. Two questions can be asked of a result:
//!
//! - [`Truthy::is_truthy`]: does it count as a pass? Zero, empty strings,
//!   `None`, `()` and `null` do not.
//! - [`Truthy::is_false`]: is it *exactly* the boolean `false`? This is a
//!   narrower test than "not truthy" and is what `reject` keys on.

/// A value that can be tested for truthiness
pub trait Truthy {
    /// Whether the value counts as a pass
    fn is_truthy(&self) -> bool;

    /// Whether the value is exactly boolean `false`
    fn is_false(&self) -> bool {
        false
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }

    fn is_false(&self) -> bool {
        !*self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }

    fn is_false(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_false)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    fn is_false(&self) -> bool {
        (**self).is_false()
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn is_false(&self) -> bool {
        matches!(self, serde_json::Value::Bool(false))
    }
}
