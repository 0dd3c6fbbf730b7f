/// Creates a `Vec<String>` out of a list of items
/// that implement `ToString`.
#[macro_export]
macro_rules! string_vec {
    ($($x:expr),+ $(,)?) => {
        vec![$($x.to_string()),+]
    };
}
