//! Text conversion for vertex values.

/// Converts a vertex into the text used by the DOT writer.
///
/// Every vertex type that is rendered must supply this. Values are written
/// verbatim, so callers are responsible for quoting identifiers that DOT
/// would not accept bare.
pub trait Label {
    fn label(&self) -> String;
}

impl Label for str {
    fn label(&self) -> String {
        self.to_owned()
    }
}

impl Label for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl<T: Label + ?Sized> Label for &T {
    fn label(&self) -> String {
        (**self).label()
    }
}

macro_rules! label_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Label for $ty {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

label_via_display!(char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
